//! TIFF encoder
//!
//! Writes the one layout this codec produces: header, a single IFD right
//! after it, zero padding up to byte 256 and then the raw pixel data. The
//! decoder of any TIFF reader finds the pixels through the StripOffsets
//! tag; files written here always point it at the same fixed position.

use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::io::byte_order::ByteOrder;
use crate::tiff::constants::{
    compression, layout, new_subfile_type, photometric, sample_format, tags,
};
use crate::tiff::errors::{TiffError, TiffResult};
use crate::tiff::header::Header;
use crate::tiff::ifd::{IFDEntry, IFD};
use crate::tiff::session::{ComponentSwap, TiffWriter};
use crate::tiff::validation;

/// Builder-style encoder
///
/// Defaults to the host byte order, which is what [`crate::save`] uses.
#[derive(Debug, Clone, Copy)]
pub struct Encoder {
    byte_order: ByteOrder,
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder {
    /// Creates an encoder writing in host byte order
    pub fn new() -> Self {
        Encoder {
            byte_order: ByteOrder::native(),
        }
    }

    /// Selects the byte order of the file
    ///
    /// Pixel data is taken in host order. When `byte_order` is not the
    /// host's, 16 and 32-bit components are swapped into it on write.
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Byte order this encoder writes
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Builds the directory describing an image
    ///
    /// The order of the entries is fixed. 32-bit images get an extra
    /// SampleFormat entry marking the components as floats.
    pub fn build_ifd(width: u32, height: u32, components: u32, bits_per_component: u32, total_bytes: u32) -> IFD {
        let photometric = if components == 1 {
            photometric::BLACK_IS_ZERO
        } else {
            photometric::RGB
        };

        let mut ifd = IFD::new();
        ifd.add_entry(IFDEntry::long(tags::NEW_SUBFILE_TYPE, new_subfile_type::FULL_RESOLUTION));
        ifd.add_entry(IFDEntry::long(tags::IMAGE_WIDTH, width));
        ifd.add_entry(IFDEntry::long(tags::IMAGE_LENGTH, height));
        ifd.add_entry(IFDEntry::long(tags::BITS_PER_SAMPLE, bits_per_component));
        ifd.add_entry(IFDEntry::long(tags::COMPRESSION, compression::NONE));
        ifd.add_entry(IFDEntry::long(tags::PHOTOMETRIC_INTERPRETATION, photometric));
        ifd.add_entry(IFDEntry::long(tags::STRIP_OFFSETS, layout::PIXEL_DATA_OFFSET));
        ifd.add_entry(IFDEntry::long(tags::SAMPLES_PER_PIXEL, components));
        if bits_per_component == 32 {
            ifd.add_entry(IFDEntry::long(tags::SAMPLE_FORMAT, sample_format::IEEEFP));
        }
        ifd.add_entry(IFDEntry::long(tags::ROWS_PER_STRIP, height));
        ifd.add_entry(IFDEntry::long(tags::STRIP_BYTE_COUNTS, total_bytes));
        ifd
    }

    /// Writes a complete file to `writer`
    ///
    /// Parameters are validated before anything is written. Only the first
    /// `width * height * components * bits / 8` bytes of `data` are used.
    pub fn write_to<W: Write>(
        &self,
        writer: W,
        width: u32,
        height: u32,
        components: u32,
        bits_per_component: u32,
        data: &[u8],
    ) -> TiffResult<W> {
        let total_bytes = validation::validate_image_parameters(
            width, height, components, bits_per_component, data.len())?;

        let mut out = TiffWriter::new(writer, self.byte_order);

        Header::new(out.byte_order()).write(&mut out)?;

        let ifd = Self::build_ifd(width, height, components, bits_per_component, total_bytes);
        let handler = out.byte_order().create_handler();
        ifd.write(&mut out, handler.as_ref())?;

        out.pad_to(layout::PIXEL_DATA_OFFSET as u64, layout::PADDING_BYTE)?;
        let pixels = &data[..total_bytes as usize];
        let swap = ComponentSwap::for_components(self.byte_order.is_swapped(), bits_per_component);
        if swap == ComponentSwap::None {
            out.write_bytes(pixels)?;
        } else {
            debug!("Converting {}-bit components to {}", bits_per_component, self.byte_order.name());
            let mut converted = pixels.to_vec();
            swap.apply(&mut converted);
            out.write_bytes(&converted)?;
        }

        debug!("Wrote {}x{} image, {} components at {} bits, {} bytes total",
               width, height, components, bits_per_component, out.bytes_written());
        out.finish()
    }

    /// Writes a complete file at `path`
    ///
    /// Parameters are checked first, so invalid input never creates the file.
    pub fn save<P: AsRef<Path>>(
        &self,
        path: P,
        width: u32,
        height: u32,
        components: u32,
        bits_per_component: u32,
        data: &[u8],
    ) -> TiffResult<()> {
        let path = path.as_ref();
        validation::validate_image_parameters(width, height, components, bits_per_component, data.len())?;

        info!("Writing TIFF to {}", path.display());
        let file = File::create(path).map_err(TiffError::SinkUnavailable)?;
        let writer = BufWriter::new(file);

        self.write_to(writer, width, height, components, bits_per_component, data)?;
        Ok(())
    }
}
