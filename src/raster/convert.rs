//! Tensor value to 8-bit pixel conversion

use serde::{Deserialize, Serialize};

use super::source::ImageSource;
use crate::error::{Error, Result};

/// How raw tensor values map onto the 0..=255 byte range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// Values in [-1, 1], the usual generator output (`tanh`)
    #[default]
    SignedUnit,
    /// Values in [0, 1]
    Unit,
    /// Rescale each image so its minimum is 0 and its maximum 255
    MinMax,
}

/// Pixel layout of a [`DisplayImage`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Luma,
    LumaAlpha,
    Rgb,
    Rgba,
}

impl ColorMode {
    /// Display mode for a channel count
    pub fn from_channels(channels: usize) -> Result<Self> {
        match channels {
            1 => Ok(Self::Luma),
            2 => Ok(Self::LumaAlpha),
            3 => Ok(Self::Rgb),
            4 => Ok(Self::Rgba),
            _ => Err(Error::UnsupportedChannels { channels }),
        }
    }

    /// Bytes per pixel
    pub fn channels(self) -> usize {
        match self {
            Self::Luma => 1,
            Self::LumaAlpha => 2,
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }
}

/// An 8-bit image ready to be encoded
///
/// Pixels are stored row-major with interleaved channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayImage {
    width: u32,
    height: u32,
    mode: ColorMode,
    data: Vec<u8>,
}

impl DisplayImage {
    /// Wrap an interleaved byte buffer
    pub fn from_raw(width: u32, height: u32, mode: ColorMode, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyImage { width: width as usize, height: height as usize });
        }
        let expected = width as usize * height as usize * mode.channels();
        if data.len() != expected {
            return Err(Error::InvalidShape {
                layout: format!("{mode:?}"),
                expected: format!("expected {expected} bytes for {width}x{height}"),
                actual: vec![data.len()],
            });
        }
        Ok(Self { width, height, mode, data })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Channel values of the pixel at (x, y), `None` outside the image
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let c = self.mode.channels();
        let start = (y as usize * self.width as usize + x as usize) * c;
        self.data.get(start..start + c)
    }
}

/// Convert a tensor image into displayable bytes and its color mode
pub fn tensor_to_image(image: &dyn ImageSource, normalization: Normalization) -> Result<DisplayImage> {
    let (width, height, channels) = (image.width(), image.height(), image.channels());
    if width == 0 || height == 0 {
        return Err(Error::EmptyImage { width, height });
    }
    let mode = ColorMode::from_channels(channels)?;

    let (offset, scale) = match normalization {
        Normalization::SignedUnit => (1.0, 127.5),
        Normalization::Unit => (0.0, 255.0),
        Normalization::MinMax => {
            let (min, max) = value_range(image);
            let range = max - min;
            let scale = if range > 0.0 && range.is_finite() { 255.0 / range } else { 0.0 };
            (-min, scale)
        }
    };

    let mut data = Vec::with_capacity(width * height * channels);
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                let v = (image.sample(x, y, c) + offset) * scale;
                data.push(v.clamp(0.0, 255.0) as u8);
            }
        }
    }

    DisplayImage::from_raw(width as u32, height as u32, mode, data)
}

fn value_range(image: &dyn ImageSource) -> (f32, f32) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for y in 0..image.height() {
        for x in 0..image.width() {
            for c in 0..image.channels() {
                let v = image.sample(x, y, c);
                min = min.min(v);
                max = max.max(v);
            }
        }
    }
    (min, max)
}
