//! TIFF format constants
//!
//! This module defines constants used throughout the codec, replacing
//! magic numbers with descriptive names. Values that can appear in the
//! value slot of a directory entry are typed as `u32` since that is the
//! width the directory stores.

/// TIFF header constants
pub mod header {
    /// Standard TIFF version number (42)
    pub const TIFF_VERSION: u16 = 42;

    /// "II" byte order marker for little-endian
    pub const LITTLE_ENDIAN_MARKER: [u8; 2] = [0x49, 0x49];

    /// "MM" byte order marker for big-endian
    pub const BIG_ENDIAN_MARKER: [u8; 2] = [0x4D, 0x4D];

    /// Size of the classic TIFF header in bytes
    pub const HEADER_SIZE: u32 = 8;

    /// Where the writer places the first (and only) IFD
    pub const FIRST_IFD_OFFSET: u32 = 8;
}

/// Layout constants of the files this codec writes
pub mod layout {
    /// Size of one classic IFD entry in bytes
    pub const IFD_ENTRY_SIZE: u32 = 12;

    /// Pixel data always starts at this byte in files written by the encoder
    pub const PIXEL_DATA_OFFSET: u32 = 256;

    /// Filler byte between the directory and the pixel data
    pub const PADDING_BYTE: u8 = 0x00;
}

/// Field types as defined by TIFF 6.0
pub mod field_types {
    pub const BYTE: u16 = 1;       // 8-bit unsigned integer
    pub const ASCII: u16 = 2;      // 8-bit byte containing ASCII character
    pub const SHORT: u16 = 3;      // 16-bit unsigned integer
    pub const LONG: u16 = 4;       // 32-bit unsigned integer
    pub const RATIONAL: u16 = 5;   // Two LONGs: numerator and denominator
    pub const SBYTE: u16 = 6;      // 8-bit signed integer
    pub const UNDEFINED: u16 = 7;  // 8-bit byte with unspecified format
    pub const SSHORT: u16 = 8;     // 16-bit signed integer
    pub const SLONG: u16 = 9;      // 32-bit signed integer
    pub const SRATIONAL: u16 = 10; // Two SLONGs: numerator and denominator
    pub const FLOAT: u16 = 11;     // Single precision IEEE floating point
    pub const DOUBLE: u16 = 12;    // Double precision IEEE floating point
}

/// Tag ids understood by the codec
pub mod tags {
    // Basic image structure tags
    pub const NEW_SUBFILE_TYPE: u16 = 254;         // Subfile data descriptor
    pub const IMAGE_WIDTH: u16 = 256;              // Width of the image in pixels
    pub const IMAGE_LENGTH: u16 = 257;             // Height of the image in pixels
    pub const BITS_PER_SAMPLE: u16 = 258;          // Bits per component
    pub const COMPRESSION: u16 = 259;              // Compression scheme
    pub const PHOTOMETRIC_INTERPRETATION: u16 = 262; // Color space of image data
    pub const FILL_ORDER: u16 = 266;               // Reused as the component swap flag
    pub const STRIP_OFFSETS: u16 = 273;            // Offset to the single data strip
    pub const ORIENTATION: u16 = 274;              // Image orientation
    pub const SAMPLES_PER_PIXEL: u16 = 277;        // Number of components per pixel
    pub const ROWS_PER_STRIP: u16 = 278;           // Rows per strip of data
    pub const STRIP_BYTE_COUNTS: u16 = 279;        // Byte count of the single strip
    pub const X_RESOLUTION: u16 = 282;             // Horizontal resolution
    pub const Y_RESOLUTION: u16 = 283;             // Vertical resolution
    pub const PLANAR_CONFIGURATION: u16 = 284;     // How components are stored
    pub const RESOLUTION_UNIT: u16 = 296;          // Unit of measurement for resolution
    pub const SOFTWARE: u16 = 305;                 // Software used to create the image
    pub const DATE_TIME: u16 = 306;                // Date and time of image creation
    pub const EXTRA_SAMPLES: u16 = 338;            // Meaning of the alpha channel
    pub const SAMPLE_FORMAT: u16 = 339;            // Interpretation of sample data
    pub const XML_PACKET: u16 = 700;               // XMP metadata
    pub const PHOTOSHOP: u16 = 34377;              // Photoshop image resources
    pub const EXIF_IFD: u16 = 34665;               // Offset to the Exif IFD
    pub const ICC_PROFILE: u16 = 34675;            // Embedded color profile
}

/// Compression types
pub mod compression {
    pub const NONE: u32 = 1;              // No compression
}

/// Photometric interpretation values
pub mod photometric {
    pub const BLACK_IS_ZERO: u32 = 1;     // Minimum value is black
    pub const RGB: u32 = 2;               // RGB color model
}

/// Planar configuration values
pub mod planar_config {
    pub const CHUNKY: u32 = 1;            // Components stored interleaved (RGBRGBRGB)
}

/// Sample format values
pub mod sample_format {
    pub const IEEEFP: u32 = 3;            // IEEE floating point data
}

/// Fill order values
pub mod fill_order {
    pub const SWAP_COMPONENTS: u32 = 1;   // Pixel components must be byte swapped
}

/// Subfile type values
pub mod new_subfile_type {
    pub const FULL_RESOLUTION: u32 = 0;  // Plain single image
}

/// Supported pixel layouts
pub mod pixel {
    pub const SUPPORTED_BITS: [u32; 3] = [8, 16, 32];
    pub const SUPPORTED_COMPONENTS: [u32; 3] = [1, 3, 4];
}
