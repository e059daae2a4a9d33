//! PNG encoding

use image::imageops::FilterType;
use image::{DynamicImage, ImageBuffer, ImageFormat};
use std::path::Path;

use super::convert::{ColorMode, DisplayImage};
use crate::config::ValidationError;
use crate::error::{Error, Result};

/// Largest width or height a stretched image may reach
pub const MAX_STRETCHED_DIM: u32 = 1 << 15;

/// Save a display image as PNG, stretching it to `aspect_ratio` (width / height)
///
/// A ratio above 1 widens the image, below 1 makes it taller, and exactly 1
/// keeps the original pixels. Existing files are overwritten.
///
/// Non-finite or non-positive ratios, and ratios that would stretch a side
/// past [`MAX_STRETCHED_DIM`], are rejected before anything is written.
pub fn save_image(image: &DisplayImage, path: impl AsRef<Path>, aspect_ratio: f32) -> Result<()> {
    let path = path.as_ref();
    if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
        return Err(ValidationError::InvalidAspectRatio(aspect_ratio).into());
    }
    let mut dynamic = to_dynamic(image)?;

    let (w, h) = (image.width(), image.height());
    if aspect_ratio > 1.0 {
        let new_w = stretched(w, aspect_ratio)?;
        dynamic = dynamic.resize_exact(new_w, h, FilterType::CatmullRom);
    } else if aspect_ratio < 1.0 {
        let new_h = stretched(h, 1.0 / aspect_ratio)?;
        dynamic = dynamic.resize_exact(w, new_h, FilterType::CatmullRom);
    }

    dynamic
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| Error::Image { path: path.to_path_buf(), source })?;

    log::debug!("Saved {}x{} image to {}", dynamic.width(), dynamic.height(), path.display());
    Ok(())
}

fn stretched(side: u32, factor: f32) -> Result<u32> {
    let target = (f64::from(side) * f64::from(factor)).round();
    if !target.is_finite() || target > f64::from(MAX_STRETCHED_DIM) {
        return Err(Error::InvalidShape {
            layout: "stretched image".to_string(),
            expected: format!("sides of at most {MAX_STRETCHED_DIM} pixels"),
            actual: vec![side as usize, target as usize],
        });
    }
    Ok((target as u32).max(1))
}

fn to_dynamic(image: &DisplayImage) -> Result<DynamicImage> {
    let (w, h) = (image.width(), image.height());
    let bytes = image.as_bytes().to_vec();
    let dynamic = match image.mode() {
        ColorMode::Luma => ImageBuffer::from_raw(w, h, bytes).map(DynamicImage::ImageLuma8),
        ColorMode::LumaAlpha => ImageBuffer::from_raw(w, h, bytes).map(DynamicImage::ImageLumaA8),
        ColorMode::Rgb => ImageBuffer::from_raw(w, h, bytes).map(DynamicImage::ImageRgb8),
        ColorMode::Rgba => ImageBuffer::from_raw(w, h, bytes).map(DynamicImage::ImageRgba8),
    };

    dynamic.ok_or_else(|| Error::InvalidShape {
        layout: format!("{:?}", image.mode()),
        expected: format!("buffer for {w}x{h}"),
        actual: vec![image.as_bytes().len()],
    })
}
