//! TIFF file format codec
//!
//! This module reads and writes the baseline subset of TIFF the crate
//! supports: one uncompressed strip of interleaved 8, 16 or 32-bit
//! components.

pub mod errors;
pub mod ifd;
pub mod tags;
pub mod header;
pub mod session;
pub mod encoder;
pub mod decoder;
pub mod inspect;
pub(crate) mod constants;
pub(crate) mod validation;
#[cfg(test)]
mod tests;

pub use crate::io::byte_order::{BigEndianHandler, ByteOrder, ByteOrderHandler, LittleEndianHandler};
pub use decoder::ImageInfo;
pub use encoder::Encoder;
pub use errors::{TiffError, TiffResult};
pub use ifd::{IFD, IFDEntry};
pub use session::{ComponentSwap, PixelReader};
pub use tags::{get_tag_name, Tag};
