pub mod io;
pub mod tiff;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::{info, load, read_image, save, save_with_byte_order};

pub use io::byte_order::{swap16, swap32, ByteOrder};
pub use tiff::{ComponentSwap, Encoder, IFDEntry, ImageInfo, PixelReader, Tag, TiffError, TiffResult};
