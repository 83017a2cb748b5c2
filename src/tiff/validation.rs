//! TIFF validation utilities
//!
//! Checks shared by the encoder and decoder: which pixel layouts the codec
//! supports and how large their payload is.

use log::error;

use crate::tiff::constants::pixel;
use crate::tiff::errors::{TiffError, TiffResult};

/// Whether `bits` is a supported component width
pub fn is_supported_bit_depth(bits: u32) -> bool {
    pixel::SUPPORTED_BITS.contains(&bits)
}

/// Whether `components` is a supported component count
pub fn is_supported_component_count(components: u32) -> bool {
    pixel::SUPPORTED_COMPONENTS.contains(&components)
}

/// Payload size of an image, `None` if it does not fit the 32-bit byte count
pub fn pixel_data_size(width: u32, height: u32, components: u32, bits_per_component: u32) -> Option<u32> {
    let bytes = width as u64 * height as u64 * components as u64 * (bits_per_component / 8) as u64;
    u32::try_from(bytes).ok()
}

/// Validates the parameters of an image about to be written
///
/// # Returns
/// The number of pixel bytes the file will carry
pub fn validate_image_parameters(
    width: u32,
    height: u32,
    components: u32,
    bits_per_component: u32,
    data_len: usize,
) -> TiffResult<u32> {
    let invalid = |msg: String| {
        error!("{}", msg);
        Err(TiffError::ParameterInvalid(msg))
    };

    if width == 0 || height == 0 {
        return invalid(format!("Image dimensions must be non-zero, got {}x{}", width, height));
    }
    if !is_supported_bit_depth(bits_per_component) {
        return invalid(format!("Bits per component must be 8, 16 or 32, got {}", bits_per_component));
    }
    if !is_supported_component_count(components) {
        return invalid(format!("Component count must be 1, 3 or 4, got {}", components));
    }

    let total_bytes = match pixel_data_size(width, height, components, bits_per_component) {
        Some(total) => total,
        None => return invalid(format!(
            "Image {}x{}x{} at {} bits exceeds 4 GiB", width, height, components, bits_per_component
        )),
    };

    if (data_len as u64) < total_bytes as u64 {
        return invalid(format!("Pixel buffer holds {} bytes, {} required", data_len, total_bytes));
    }

    Ok(total_bytes)
}
