//! TIFF decoder
//!
//! Walks the first IFD, validates that the image fits the supported
//! baseline subset, and hands a positioned [`PixelReader`] to the caller.
//! The decoder never reads pixel data itself; the caller pulls exactly the
//! bytes it wants straight into its own storage.

use log::{debug, info, trace, warn};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::io::byte_order::ByteOrder;
use crate::io::seekable::SeekableReader;
use crate::tiff::constants::{compression, fill_order, new_subfile_type, photometric, planar_config};
use crate::tiff::errors::{TiffError, TiffResult};
use crate::tiff::ifd::IFDEntry;
use crate::tiff::session::{ComponentSwap, DirectoryReader, PixelReader};
use crate::tiff::tags::Tag;
use crate::tiff::validation;

/// Validated description of an image, passed to the `load` callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Components per pixel
    pub components: u32,
    /// Bits per component: 8, 16 or 32
    pub bits_per_component: u32,
    /// Byte offset of the pixel data
    pub data_offset: u32,
    /// Byte count of the pixel data as declared by the file
    pub total_bytes: u32,
    /// Byte order declared by the file header
    pub byte_order: ByteOrder,
    /// Swap the pixel reader applies to each component
    pub component_swap: ComponentSwap,
}

impl ImageInfo {
    /// Bytes used by a single component
    pub fn bytes_per_component(&self) -> u32 {
        self.bits_per_component / 8
    }

    /// Bytes of a tightly packed `width * height * components` payload
    ///
    /// This is what a caller needs to read the whole image, and may differ
    /// from `total_bytes` if the file declares a larger strip.
    pub fn pixel_data_size(&self) -> Option<u32> {
        validation::pixel_data_size(self.width, self.height, self.components, self.bits_per_component)
    }

    /// Byte order of multi-byte components as delivered by the pixel reader
    ///
    /// Multi-byte components are stored in the file's byte order unless
    /// the reader swaps each component.
    pub fn sample_byte_order(&self) -> ByteOrder {
        match (self.component_swap, self.byte_order) {
            (ComponentSwap::None, order) => order,
            (_, ByteOrder::LittleEndian) => ByteOrder::BigEndian,
            (_, ByteOrder::BigEndian) => ByteOrder::LittleEndian,
        }
    }

    /// Converts pixel data read for this image to host byte order in place
    pub fn samples_to_native(&self, data: &mut [u8]) {
        let swap = ComponentSwap::for_components(self.sample_byte_order().is_swapped(), self.bits_per_component);
        swap.apply(data);
    }
}

/// Fields collected from the directory
///
/// Each recognised tag fills its own field, so the order of entries in the
/// file does not matter.
#[derive(Debug)]
struct ImageParameters {
    width: u32,
    height: u32,
    components: u32,
    bits_per_sample: u32,
    data_offset: Option<u32>,
    total_bytes: u32,
    rows_per_strip: Option<u32>,
    swap_components: bool,
}

impl Default for ImageParameters {
    fn default() -> Self {
        ImageParameters {
            width: 0,
            height: 0,
            // TIFF default when SamplesPerPixel is absent
            components: 1,
            bits_per_sample: 0,
            data_offset: None,
            total_bytes: 0,
            rows_per_strip: None,
            swap_components: false,
        }
    }
}

fn unsupported(entry: &IFDEntry) -> TiffError {
    warn!("Rejecting {}", entry.description());
    TiffError::UnsupportedFeature {
        tag: entry.tag,
        value: entry.value_offset,
    }
}

impl ImageParameters {
    /// Applies one directory entry, rejecting values outside the subset
    fn accept(&mut self, entry: &IFDEntry) -> TiffResult<()> {
        let value = entry.value_offset;

        match entry.kind() {
            Tag::NewSubfileType => {
                if value != new_subfile_type::FULL_RESOLUTION {
                    return Err(unsupported(entry));
                }
            }
            Tag::ImageWidth => self.width = value,
            Tag::ImageLength => self.height = value,
            // Either the depth itself or an offset to it, resolved later
            Tag::BitsPerSample => self.bits_per_sample = value,
            Tag::Compression => {
                if value != compression::NONE {
                    return Err(unsupported(entry));
                }
            }
            Tag::PhotometricInterpretation => {
                if value != photometric::BLACK_IS_ZERO && value != photometric::RGB {
                    return Err(unsupported(entry));
                }
            }
            Tag::PlanarConfiguration => {
                if value != planar_config::CHUNKY {
                    return Err(unsupported(entry));
                }
            }
            Tag::RowsPerStrip => {
                self.rows_per_strip = Some(value);
                if self.height != 0 && value != self.height {
                    return Err(unsupported(entry));
                }
            }
            Tag::StripOffsets => self.data_offset = Some(value),
            Tag::SamplesPerPixel => self.components = value,
            Tag::StripByteCounts => self.total_bytes = value,
            Tag::FillOrder => self.swap_components = value == fill_order::SWAP_COMPONENTS,

            Tag::XResolution
            | Tag::YResolution
            | Tag::ResolutionUnit
            | Tag::Orientation
            | Tag::DateTime
            | Tag::Software
            | Tag::ExtraSamples
            | Tag::SampleFormat
            | Tag::IccProfile
            | Tag::ExifIfd
            | Tag::XmlPacket
            | Tag::Photoshop => trace!("Ignoring {}", entry.kind().name()),

            Tag::Unknown(id) => trace!("Skipping unknown tag {}", id),
        }

        Ok(())
    }

    /// Checks everything that needs the whole directory
    fn check_complete(&self) -> TiffResult<u32> {
        let data_offset = match self.data_offset {
            Some(offset) if self.width != 0 && self.height != 0 && self.total_bytes != 0 => offset,
            _ => {
                warn!("Didn't read needed data: {:?}", self);
                return Err(TiffError::IncompleteDirectory {
                    width: self.width,
                    height: self.height,
                    total_bytes: self.total_bytes,
                    data_offset: self.data_offset,
                });
            }
        };

        // RowsPerStrip may precede ImageLength, in which case the eager
        // check in `accept` could not fire.
        if let Some(rows) = self.rows_per_strip {
            if rows != self.height {
                warn!("RowsPerStrip {} does not match height {}", rows, self.height);
                return Err(TiffError::UnsupportedFeature {
                    tag: Tag::RowsPerStrip.id(),
                    value: rows,
                });
            }
        }

        Ok(data_offset)
    }
}

/// Reads the real bit depth when BitsPerSample holds an offset
///
/// Multi-component images usually store one SHORT per component
/// elsewhere in the file; all components share the first value.
fn resolve_bits_per_component(directory: &mut DirectoryReader<'_>, raw: u32) -> TiffResult<u32> {
    if validation::is_supported_bit_depth(raw) {
        return Ok(raw);
    }

    debug!("BitsPerSample {} is not a direct depth, reading it at offset {:#010x}", raw, raw);
    let resolved = directory
        .seek(raw)
        .and_then(|_| directory.read_u16())
        .map_err(|e| {
            warn!("Cannot read bits per sample at {}: {}", raw, e);
            TiffError::UnresolvedBitDepth(raw)
        })? as u32;

    if !validation::is_supported_bit_depth(resolved) {
        warn!("Invalid bits per component: {} ({:#010x})", resolved, resolved);
        return Err(TiffError::UnresolvedBitDepth(resolved));
    }
    Ok(resolved)
}

/// Decodes the directory of `reader` and calls `f` with a reader positioned
/// at the pixel data
///
/// The result of `f` is the result of the decode. Errors found in the header
/// or directory are returned before `f` runs.
pub fn decode<T, F>(reader: &mut dyn SeekableReader, f: F) -> TiffResult<T>
where
    F: FnOnce(ImageInfo, &mut PixelReader<'_>) -> TiffResult<T>,
{
    let mut directory = DirectoryReader::open(reader)?;
    let entry_count = directory.read_entry_count()?;

    let mut params = ImageParameters::default();
    for _ in 0..entry_count {
        let entry = directory.read_entry()?;
        debug!("{}", entry);
        params.accept(&entry)?;
    }

    let data_offset = params.check_complete()?;
    let bits_per_component = resolve_bits_per_component(&mut directory, params.bits_per_sample)?;

    let swap = ComponentSwap::for_components(params.swap_components, bits_per_component);
    let image = ImageInfo {
        width: params.width,
        height: params.height,
        components: params.components,
        bits_per_component,
        data_offset,
        total_bytes: params.total_bytes,
        byte_order: directory.byte_order(),
        component_swap: swap,
    };
    debug!("Read needed data: {:?}", image);

    let mut pixels = directory.into_pixel_reader(data_offset, swap)?;

    f(image, &mut pixels)
}

/// Opens `path` and decodes it with [`decode`]
///
/// The file is closed when this returns, whatever the outcome.
pub fn load<P, T, F>(path: P, f: F) -> TiffResult<T>
where
    P: AsRef<Path>,
    F: FnOnce(ImageInfo, &mut PixelReader<'_>) -> TiffResult<T>,
{
    let path = path.as_ref();
    info!("Loading TIFF file: {}", path.display());

    let file = File::open(path).map_err(TiffError::SourceUnavailable)?;
    let mut reader = BufReader::new(file);
    decode(&mut reader, f)
}
