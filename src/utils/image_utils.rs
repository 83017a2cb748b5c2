//! Conversion of decoded pixel data into `image` buffers
//!
//! Used by the export command to hand a decoded image to any encoder the
//! `image` crate provides.

use image::{DynamicImage, ImageBuffer, Luma, Rgb, Rgba};
use log::debug;

use crate::io::byte_order::ByteOrder;
use crate::tiff::decoder::ImageInfo;
use crate::tiff::errors::{TiffError, TiffResult};

fn u16_samples(data: &[u8], order: ByteOrder) -> Vec<u16> {
    data.chunks_exact(2)
        .map(|c| match order {
            ByteOrder::LittleEndian => u16::from_le_bytes([c[0], c[1]]),
            ByteOrder::BigEndian => u16::from_be_bytes([c[0], c[1]]),
        })
        .collect()
}

fn f32_samples(data: &[u8], order: ByteOrder) -> Vec<f32> {
    data.chunks_exact(4)
        .map(|c| {
            let bytes = [c[0], c[1], c[2], c[3]];
            match order {
                ByteOrder::LittleEndian => f32::from_le_bytes(bytes),
                ByteOrder::BigEndian => f32::from_be_bytes(bytes),
            }
        })
        .collect()
}

fn buffer_error(image: &ImageInfo) -> TiffError {
    TiffError::GenericError(format!(
        "Pixel data does not match a {}x{} image with {} components",
        image.width, image.height, image.components
    ))
}

/// Builds a [`DynamicImage`] from the bytes read for `image`
///
/// 32-bit components are interpreted as floats. Single channel float images
/// are expanded to RGB because `image` has no grey float buffer.
pub fn to_dynamic_image(image: &ImageInfo, data: &[u8]) -> TiffResult<DynamicImage> {
    let (w, h) = (image.width, image.height);
    let order = image.sample_byte_order();
    debug!("Converting {}x{}x{} at {} bits ({}) to an image buffer",
           w, h, image.components, image.bits_per_component, order.name());

    let converted = match (image.bits_per_component, image.components) {
        (8, 1) => ImageBuffer::<Luma<u8>, _>::from_raw(w, h, data.to_vec()).map(DynamicImage::ImageLuma8),
        (8, 3) => ImageBuffer::<Rgb<u8>, _>::from_raw(w, h, data.to_vec()).map(DynamicImage::ImageRgb8),
        (8, 4) => ImageBuffer::<Rgba<u8>, _>::from_raw(w, h, data.to_vec()).map(DynamicImage::ImageRgba8),
        (16, 1) => ImageBuffer::<Luma<u16>, _>::from_raw(w, h, u16_samples(data, order)).map(DynamicImage::ImageLuma16),
        (16, 3) => ImageBuffer::<Rgb<u16>, _>::from_raw(w, h, u16_samples(data, order)).map(DynamicImage::ImageRgb16),
        (16, 4) => ImageBuffer::<Rgba<u16>, _>::from_raw(w, h, u16_samples(data, order)).map(DynamicImage::ImageRgba16),
        (32, 1) => {
            let grey = f32_samples(data, order);
            let rgb: Vec<f32> = grey.iter().flat_map(|v| [*v, *v, *v]).collect();
            ImageBuffer::<Rgb<f32>, _>::from_raw(w, h, rgb).map(DynamicImage::ImageRgb32F)
        }
        (32, 3) => ImageBuffer::<Rgb<f32>, _>::from_raw(w, h, f32_samples(data, order)).map(DynamicImage::ImageRgb32F),
        (32, 4) => ImageBuffer::<Rgba<f32>, _>::from_raw(w, h, f32_samples(data, order)).map(DynamicImage::ImageRgba32F),
        (bits, components) => {
            return Err(TiffError::GenericError(format!(
                "Cannot convert {} components at {} bits", components, bits
            )))
        }
    };

    converted.ok_or_else(|| buffer_error(image))
}

/// Writes `data` to `output`, picking the format from the file extension
pub fn save_as(image: &ImageInfo, data: &[u8], output: &str) -> TiffResult<()> {
    let dynamic = to_dynamic_image(image, data)?;
    dynamic
        .save(output)
        .map_err(|e| TiffError::GenericError(format!("Failed to write {}: {}", output, e)))
}
