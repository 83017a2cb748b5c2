//! Streaming read/write sessions
//!
//! A session wraps the byte source or sink for the duration of a single
//! `save`, `load` or `info` call. Byte order handling is fixed when the
//! session is built: the [`DirectoryReader`] takes it from the header and
//! the [`PixelReader`] takes its [`ComponentSwap`] mode from the decoded
//! directory. Neither changes afterwards.

use log::{debug, trace};
use std::io::{self, Read, Seek, SeekFrom, Write};

use crate::io::byte_order::{ByteOrder, ByteOrderHandler};
use crate::io::seekable::SeekableReader;
use crate::tiff::errors::{TiffError, TiffResult};
use crate::tiff::header::Header;
use crate::tiff::ifd::IFDEntry;

/// Sequential writer that counts the bytes it has emitted
pub struct TiffWriter<W: Write> {
    inner: W,
    byte_order: ByteOrder,
    bytes_written: u64,
}

impl<W: Write> TiffWriter<W> {
    /// Creates a writer emitting multi-byte values in `byte_order`
    pub fn new(inner: W, byte_order: ByteOrder) -> Self {
        TiffWriter {
            inner,
            byte_order,
            bytes_written: 0,
        }
    }

    /// Bytes written so far
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Byte order for headers and entries
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Writes raw bytes verbatim
    pub fn write_bytes(&mut self, data: &[u8]) -> TiffResult<()> {
        self.write_all(data)?;
        Ok(())
    }

    /// Writes `byte` until `offset` bytes have been written in total
    pub fn pad_to(&mut self, offset: u64, byte: u8) -> TiffResult<()> {
        if self.bytes_written > offset {
            return Err(TiffError::GenericError(format!(
                "Cannot pad to {}: already wrote {} bytes", offset, self.bytes_written
            )));
        }
        let padding = (offset - self.bytes_written) as usize;
        trace!("Padding {} bytes up to offset {}", padding, offset);
        self.write_all(&vec![byte; padding])?;
        Ok(())
    }

    /// Flushes and returns the underlying sink
    pub fn finish(mut self) -> TiffResult<W> {
        self.inner.flush()?;
        debug!("Finished writing {} bytes", self.bytes_written);
        Ok(self.inner)
    }
}

impl<W: Write> Write for TiffWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.bytes_written += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Reader for the header and directory part of a file
///
/// Every multi-byte read goes through the handler chosen from the header
/// marker, so all values come out in host order.
pub struct DirectoryReader<'a> {
    reader: &'a mut dyn SeekableReader,
    handler: Box<dyn ByteOrderHandler>,
    header: Header,
}

impl<'a> DirectoryReader<'a> {
    /// Reads and validates the header, fixing the byte order for the session
    pub fn open(mut reader: &'a mut dyn SeekableReader) -> TiffResult<Self> {
        reader.seek(SeekFrom::Start(0))?;
        let header = Header::read(&mut reader)?;
        Ok(DirectoryReader {
            reader,
            handler: header.byte_order.create_handler(),
            header,
        })
    }

    /// The validated header
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Byte order declared by the file
    pub fn byte_order(&self) -> ByteOrder {
        self.header.byte_order
    }

    /// Moves to an absolute position
    pub fn seek(&mut self, offset: u32) -> TiffResult<()> {
        self.reader.seek(SeekFrom::Start(offset as u64))?;
        Ok(())
    }

    /// Reads a u16 in file order
    pub fn read_u16(&mut self) -> TiffResult<u16> {
        Ok(self.handler.read_u16(&mut self.reader)?)
    }

    /// Reads a u32 in file order
    pub fn read_u32(&mut self) -> TiffResult<u32> {
        Ok(self.handler.read_u32(&mut self.reader)?)
    }

    /// Seeks to the first directory and reads its entry count
    pub fn read_entry_count(&mut self) -> TiffResult<u16> {
        self.seek(self.header.first_ifd_offset)?;
        let count = self.read_u16()?;
        debug!("IFD at {} has {} entries", self.header.first_ifd_offset, count);
        Ok(count)
    }

    /// Reads the next directory entry
    pub fn read_entry(&mut self) -> TiffResult<IFDEntry> {
        IFDEntry::read(&mut self.reader, self.handler.as_ref())
    }

    /// Hands the source over to a pixel reader positioned at `data_offset`
    pub fn into_pixel_reader(mut self, data_offset: u32, swap: ComponentSwap) -> TiffResult<PixelReader<'a>> {
        self.seek(data_offset)?;
        Ok(PixelReader {
            reader: self.reader,
            swap,
            bytes_read: 0,
        })
    }
}

/// How the pixel reader reorders bytes within each component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentSwap {
    /// Bytes are delivered as stored
    None,
    /// Every 16-bit component is byte swapped
    Swap16,
    /// Every 32-bit component is byte swapped
    Swap32,
}

impl ComponentSwap {
    /// Swap mode for a component width when swapping was requested
    ///
    /// 8-bit components have no byte order and are never touched.
    pub fn for_components(requested: bool, bits_per_component: u32) -> Self {
        match (requested, bits_per_component) {
            (true, 16) => ComponentSwap::Swap16,
            (true, 32) => ComponentSwap::Swap32,
            _ => ComponentSwap::None,
        }
    }

    /// Reverses the bytes of each component in `data` in place
    ///
    /// Trailing bytes that do not form a whole component are left alone.
    pub fn apply(&self, data: &mut [u8]) {
        let width = match self {
            ComponentSwap::None => return,
            ComponentSwap::Swap16 => 2,
            ComponentSwap::Swap32 => 4,
        };
        for component in data.chunks_exact_mut(width) {
            component.reverse();
        }
    }
}

/// Reader handed to the `load` callback, positioned at the pixel data
///
/// It borrows the source of the decode call, so it cannot outlive it.
pub struct PixelReader<'a> {
    reader: &'a mut dyn SeekableReader,
    swap: ComponentSwap,
    bytes_read: u64,
}

impl<'a> PixelReader<'a> {
    /// Fills `buffer` completely or fails with [`TiffError::ShortRead`]
    pub fn read_bytes(&mut self, buffer: &mut [u8]) -> TiffResult<()> {
        self.reader.read_exact(buffer)?;
        self.bytes_read += buffer.len() as u64;
        self.swap.apply(buffer);
        Ok(())
    }

    /// Bytes delivered so far
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// The swap mode fixed for this reader
    pub fn component_swap(&self) -> ComponentSwap {
        self.swap
    }
}
