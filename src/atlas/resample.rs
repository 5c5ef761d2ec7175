//! Nearest-neighbor resampling.

use crate::error::{AtlasError, Result};
use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Resize with nearest-neighbor sampling at pixel centers.
///
/// Output pixel `(x, y)` copies source pixel
/// `(floor((x + 0.5) * src_w / width), floor((y + 0.5) * src_h / height))`.
/// Colors are never blended, so every output pixel exists in the source.
pub fn resize_nearest(image: &RgbaImage, width: u32, height: u32) -> Result<RgbaImage> {
    let (src_w, src_h) = image.dimensions();
    if src_w == 0 || src_h == 0 {
        return Err(AtlasError::InvalidTile(format!(
            "cannot resize empty {}x{} image",
            src_w, src_h
        )));
    }
    if width == 0 || height == 0 {
        return Err(AtlasError::InvalidTile(format!(
            "cannot resize to {}x{}",
            width, height
        )));
    }

    Ok(imageops::resize(image, width, height, FilterType::Nearest))
}
