//! Path based entry points
//!
//! These are the three operations most callers need. Each opens or creates
//! the file, runs the codec and closes the file again before returning.

use std::path::Path;

use crate::io::byte_order::ByteOrder;
use crate::tiff::decoder::{self, ImageInfo};
use crate::tiff::encoder::Encoder;
use crate::tiff::errors::{TiffError, TiffResult};
use crate::tiff::ifd::IFDEntry;
use crate::tiff::inspect;
use crate::tiff::session::PixelReader;

/// Writes an image in host byte order
///
/// `data` holds `width * height * components * bits_per_component / 8`
/// bytes of row-major, interleaved samples. Nothing is created on disk when
/// the parameters are rejected.
///
/// # Example
/// ```no_run
/// let pixels = vec![0u8; 32 * 32 * 3];
/// minitiff::save("out.tif", 32, 32, 3, 8, &pixels)?;
/// # Ok::<(), minitiff::TiffError>(())
/// ```
pub fn save<P: AsRef<Path>>(
    path: P,
    width: u32,
    height: u32,
    components: u32,
    bits_per_component: u32,
    data: &[u8],
) -> TiffResult<()> {
    Encoder::new().save(path, width, height, components, bits_per_component, data)
}

/// Writes an image in an explicit byte order
///
/// `data` is in host order; multi-byte components are converted when
/// `byte_order` differs from it.
pub fn save_with_byte_order<P: AsRef<Path>>(
    path: P,
    byte_order: ByteOrder,
    width: u32,
    height: u32,
    components: u32,
    bits_per_component: u32,
    data: &[u8],
) -> TiffResult<()> {
    Encoder::new()
        .with_byte_order(byte_order)
        .save(path, width, height, components, bits_per_component, data)
}

/// Decodes the directory of `path` and lets `f` pull the pixel data
///
/// # Example
/// ```no_run
/// let pixels = minitiff::load("in.tif", |info, reader| {
///     let mut pixels = vec![0u8; info.pixel_data_size().unwrap_or(0) as usize];
///     reader.read_bytes(&mut pixels)?;
///     Ok(pixels)
/// })?;
/// # Ok::<(), minitiff::TiffError>(())
/// ```
pub fn load<P, T, F>(path: P, f: F) -> TiffResult<T>
where
    P: AsRef<Path>,
    F: FnOnce(ImageInfo, &mut PixelReader<'_>) -> TiffResult<T>,
{
    decoder::load(path, f)
}

/// Calls `f` with every directory entry of `path`
pub fn info<P, F>(path: P, f: F) -> TiffResult<()>
where
    P: AsRef<Path>,
    F: FnMut(&IFDEntry),
{
    inspect::info(path, f)
}

/// Loads a whole image into memory
pub fn read_image<P: AsRef<Path>>(path: P) -> TiffResult<(ImageInfo, Vec<u8>)> {
    load(path, |image, reader| {
        let size = image.pixel_data_size().ok_or_else(|| {
            TiffError::GenericError(format!("Image {}x{} is too large", image.width, image.height))
        })?;
        let mut pixels = vec![0u8; size as usize];
        reader.read_bytes(&mut pixels)?;
        Ok((image, pixels))
    })
}
