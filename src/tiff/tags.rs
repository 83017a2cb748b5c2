//! Tag identifiers recognised by the codec
//!
//! The decoder dispatches on [`Tag`] rather than on raw ids so every tag the
//! codec knows about is handled explicitly. Ids outside this set map to
//! [`Tag::Unknown`] and are skipped.

use crate::tiff::constants::tags;

/// A directory tag id, classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    NewSubfileType,
    ImageWidth,
    ImageLength,
    BitsPerSample,
    Compression,
    PhotometricInterpretation,
    FillOrder,
    StripOffsets,
    Orientation,
    SamplesPerPixel,
    RowsPerStrip,
    StripByteCounts,
    XResolution,
    YResolution,
    PlanarConfiguration,
    ResolutionUnit,
    Software,
    DateTime,
    ExtraSamples,
    SampleFormat,
    XmlPacket,
    Photoshop,
    ExifIfd,
    IccProfile,
    Unknown(u16),
}

impl Tag {
    /// Classifies a raw tag id
    pub fn from_id(id: u16) -> Self {
        match id {
            tags::NEW_SUBFILE_TYPE => Tag::NewSubfileType,
            tags::IMAGE_WIDTH => Tag::ImageWidth,
            tags::IMAGE_LENGTH => Tag::ImageLength,
            tags::BITS_PER_SAMPLE => Tag::BitsPerSample,
            tags::COMPRESSION => Tag::Compression,
            tags::PHOTOMETRIC_INTERPRETATION => Tag::PhotometricInterpretation,
            tags::FILL_ORDER => Tag::FillOrder,
            tags::STRIP_OFFSETS => Tag::StripOffsets,
            tags::ORIENTATION => Tag::Orientation,
            tags::SAMPLES_PER_PIXEL => Tag::SamplesPerPixel,
            tags::ROWS_PER_STRIP => Tag::RowsPerStrip,
            tags::STRIP_BYTE_COUNTS => Tag::StripByteCounts,
            tags::X_RESOLUTION => Tag::XResolution,
            tags::Y_RESOLUTION => Tag::YResolution,
            tags::PLANAR_CONFIGURATION => Tag::PlanarConfiguration,
            tags::RESOLUTION_UNIT => Tag::ResolutionUnit,
            tags::SOFTWARE => Tag::Software,
            tags::DATE_TIME => Tag::DateTime,
            tags::EXTRA_SAMPLES => Tag::ExtraSamples,
            tags::SAMPLE_FORMAT => Tag::SampleFormat,
            tags::XML_PACKET => Tag::XmlPacket,
            tags::PHOTOSHOP => Tag::Photoshop,
            tags::EXIF_IFD => Tag::ExifIfd,
            tags::ICC_PROFILE => Tag::IccProfile,
            other => Tag::Unknown(other),
        }
    }

    /// The raw id as stored on disk
    pub fn id(&self) -> u16 {
        match self {
            Tag::NewSubfileType => tags::NEW_SUBFILE_TYPE,
            Tag::ImageWidth => tags::IMAGE_WIDTH,
            Tag::ImageLength => tags::IMAGE_LENGTH,
            Tag::BitsPerSample => tags::BITS_PER_SAMPLE,
            Tag::Compression => tags::COMPRESSION,
            Tag::PhotometricInterpretation => tags::PHOTOMETRIC_INTERPRETATION,
            Tag::FillOrder => tags::FILL_ORDER,
            Tag::StripOffsets => tags::STRIP_OFFSETS,
            Tag::Orientation => tags::ORIENTATION,
            Tag::SamplesPerPixel => tags::SAMPLES_PER_PIXEL,
            Tag::RowsPerStrip => tags::ROWS_PER_STRIP,
            Tag::StripByteCounts => tags::STRIP_BYTE_COUNTS,
            Tag::XResolution => tags::X_RESOLUTION,
            Tag::YResolution => tags::Y_RESOLUTION,
            Tag::PlanarConfiguration => tags::PLANAR_CONFIGURATION,
            Tag::ResolutionUnit => tags::RESOLUTION_UNIT,
            Tag::Software => tags::SOFTWARE,
            Tag::DateTime => tags::DATE_TIME,
            Tag::ExtraSamples => tags::EXTRA_SAMPLES,
            Tag::SampleFormat => tags::SAMPLE_FORMAT,
            Tag::XmlPacket => tags::XML_PACKET,
            Tag::Photoshop => tags::PHOTOSHOP,
            Tag::ExifIfd => tags::EXIF_IFD,
            Tag::IccProfile => tags::ICC_PROFILE,
            Tag::Unknown(id) => *id,
        }
    }

    /// Human readable name, "Unknown" for unrecognised ids
    pub fn name(&self) -> &'static str {
        match self {
            Tag::NewSubfileType => "NewSubfileType",
            Tag::ImageWidth => "ImageWidth",
            Tag::ImageLength => "ImageLength",
            Tag::BitsPerSample => "BitsPerSample",
            Tag::Compression => "Compression",
            Tag::PhotometricInterpretation => "PhotometricInterpretation",
            Tag::FillOrder => "FillOrder",
            Tag::StripOffsets => "StripOffsets",
            Tag::Orientation => "Orientation",
            Tag::SamplesPerPixel => "SamplesPerPixel",
            Tag::RowsPerStrip => "RowsPerStrip",
            Tag::StripByteCounts => "StripByteCounts",
            Tag::XResolution => "XResolution",
            Tag::YResolution => "YResolution",
            Tag::PlanarConfiguration => "PlanarConfiguration",
            Tag::ResolutionUnit => "ResolutionUnit",
            Tag::Software => "Software",
            Tag::DateTime => "DateTime",
            Tag::ExtraSamples => "ExtraSamples",
            Tag::SampleFormat => "SampleFormat",
            Tag::XmlPacket => "XMLPacket",
            Tag::Photoshop => "Photoshop",
            Tag::ExifIfd => "ExifIFD",
            Tag::IccProfile => "ICCProfile",
            Tag::Unknown(_) => "Unknown",
        }
    }
}

/// Get the name of a TIFF tag
pub fn get_tag_name(tag: u16) -> &'static str {
    Tag::from_id(tag).name()
}

/// Get the name of a TIFF field type
pub fn get_field_type_name(field_type: u16) -> &'static str {
    use crate::tiff::constants::field_types;

    match field_type {
        field_types::BYTE => "BYTE",
        field_types::ASCII => "ASCII",
        field_types::SHORT => "SHORT",
        field_types::LONG => "LONG",
        field_types::RATIONAL => "RATIONAL",
        field_types::SBYTE => "SBYTE",
        field_types::UNDEFINED => "UNDEFINED",
        field_types::SSHORT => "SSHORT",
        field_types::SLONG => "SLONG",
        field_types::SRATIONAL => "SRATIONAL",
        field_types::FLOAT => "FLOAT",
        field_types::DOUBLE => "DOUBLE",
        _ => "Unknown",
    }
}
