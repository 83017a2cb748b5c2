//! TIFF file header
//!
//! The classic header is eight bytes: a two byte order marker ("II" or
//! "MM"), the magic number 42 in that byte order, and the offset of the
//! first IFD.

use log::{debug, error};
use std::io::{Read, Write};

use crate::io::byte_order::ByteOrder;
use crate::tiff::constants::header;
use crate::tiff::errors::{TiffError, TiffResult};

/// Decoded file header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Byte order declared by the marker
    pub byte_order: ByteOrder,
    /// Offset of the first IFD, already converted to host order
    pub first_ifd_offset: u32,
}

impl Header {
    /// Header for a file written in `byte_order` with the directory
    /// immediately after the header
    pub fn new(byte_order: ByteOrder) -> Self {
        Header {
            byte_order,
            first_ifd_offset: header::FIRST_IFD_OFFSET,
        }
    }

    /// Reads and validates the eight header bytes
    ///
    /// Fails with [`TiffError::InvalidHeader`] unless both marker bytes are
    /// the same recognised marker and the magic number matches in that
    /// byte order.
    pub fn read(reader: &mut dyn Read) -> TiffResult<Self> {
        let mut raw = [0u8; header::HEADER_SIZE as usize];
        reader.read_exact(&mut raw)?;

        let byte_order = match ByteOrder::from_marker([raw[0], raw[1]]) {
            Some(order) => order,
            None => {
                error!("Invalid byte order marker: {:#04x} {:#04x}", raw[0], raw[1]);
                return Err(TiffError::InvalidHeader);
            }
        };
        let handler = byte_order.create_handler();

        let magic = handler.read_u16(&mut &raw[2..4])?;
        if magic != header::TIFF_VERSION {
            error!("Invalid TIFF magic {} for {}", magic, byte_order.name());
            return Err(TiffError::InvalidHeader);
        }

        let first_ifd_offset = handler.read_u32(&mut &raw[4..8])?;
        debug!("Header: {}, first IFD at {}, swapped: {}",
               byte_order.name(), first_ifd_offset, byte_order.is_swapped());

        Ok(Header {
            byte_order,
            first_ifd_offset,
        })
    }

    /// Writes the header in its own byte order
    pub fn write(&self, writer: &mut dyn Write) -> TiffResult<()> {
        let handler = self.byte_order.create_handler();
        writer.write_all(&self.byte_order.marker())?;
        handler.write_u16(writer, header::TIFF_VERSION)?;
        handler.write_u32(writer, self.first_ifd_offset)?;
        Ok(())
    }
}
