//! Tensor to PNG plumbing
//!
//! Images reach the logger as tensors in whatever layout the model produced.
//! [`ImageSource`] is the narrow view the converter needs; [`tensor_to_image`]
//! turns it into an 8-bit [`DisplayImage`] and [`save_image`] encodes that as PNG.

mod convert;
mod source;
mod writer;


pub use convert::{tensor_to_image, ColorMode, DisplayImage, Normalization};
pub use source::{DimOrder, ImageSource, TensorView};
pub use writer::{save_image, MAX_STRETCHED_DIM};
