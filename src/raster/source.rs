//! Image capability trait and ndarray adapters

use ndarray::{ArrayBase, ArrayViewD, Data, Ix2, Ix3};
use std::fmt;

use crate::error::{Error, Result};

/// Read-only pixel access shared by every image representation
///
/// Coordinates are `x` (column), `y` (row) and `c` (channel). Values are raw
/// tensor values; scaling to bytes happens in the converter.
pub trait ImageSource {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn channels(&self) -> usize;
    fn sample(&self, x: usize, y: usize, c: usize) -> f32;
}

/// Grayscale image with dims (height, width)
impl<S: Data<Elem = f32>> ImageSource for ArrayBase<S, Ix2> {
    fn width(&self) -> usize {
        self.dim().1
    }

    fn height(&self) -> usize {
        self.dim().0
    }

    fn channels(&self) -> usize {
        1
    }

    fn sample(&self, x: usize, y: usize, _c: usize) -> f32 {
        self[[y, x]]
    }
}

/// Image with dims (channels, height, width)
impl<S: Data<Elem = f32>> ImageSource for ArrayBase<S, Ix3> {
    fn width(&self) -> usize {
        self.dim().2
    }

    fn height(&self) -> usize {
        self.dim().1
    }

    fn channels(&self) -> usize {
        self.dim().0
    }

    fn sample(&self, x: usize, y: usize, c: usize) -> f32 {
        self[[c, y, x]]
    }
}

/// How to interpret dimensions of a dynamic-rank tensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimOrder {
    /// dims: (height, width)
    Hw,
    /// dims: (channels, height, width)
    Chw,
    /// dims: (height, width, channels)
    Hwc,
    /// dims: (batch_size, channels, height, width)
    Nchw,
    /// dims: (batch_size, height, width, channels)
    Nhwc,
}

impl DimOrder {
    fn rank(self) -> usize {
        match self {
            Self::Hw => 2,
            Self::Chw | Self::Hwc => 3,
            Self::Nchw | Self::Nhwc => 4,
        }
    }

    fn expected(self) -> &'static str {
        match self {
            Self::Hw => "expected (height, width)",
            Self::Chw => "expected (channels, height, width)",
            Self::Hwc => "expected (height, width, channels)",
            Self::Nchw => "expected (batch, channels, height, width) with batch >= 1",
            Self::Nhwc => "expected (batch, height, width, channels) with batch >= 1",
        }
    }
}

impl fmt::Display for DimOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A dynamic-rank tensor viewed as an image
///
/// Batched layouts expose the first item of the batch.
#[derive(Debug, Clone)]
pub struct TensorView<'a> {
    view: ArrayViewD<'a, f32>,
    order: DimOrder,
}

impl<'a> TensorView<'a> {
    /// Wrap a tensor, checking its rank against `order`
    pub fn new(view: ArrayViewD<'a, f32>, order: DimOrder) -> Result<Self> {
        let shape = view.shape();
        let batched = matches!(order, DimOrder::Nchw | DimOrder::Nhwc);
        if shape.len() != order.rank() || (batched && shape[0] == 0) {
            return Err(Error::InvalidShape {
                layout: order.to_string(),
                expected: order.expected().to_string(),
                actual: shape.to_vec(),
            });
        }

        Ok(Self { view, order })
    }

    /// Dimension layout of the wrapped tensor
    pub fn order(&self) -> DimOrder {
        self.order
    }

    /// (channels, height, width) of the displayed item
    fn chw(&self) -> (usize, usize, usize) {
        let s = self.view.shape();
        match self.order {
            DimOrder::Hw => (1, s[0], s[1]),
            DimOrder::Chw => (s[0], s[1], s[2]),
            DimOrder::Hwc => (s[2], s[0], s[1]),
            DimOrder::Nchw => (s[1], s[2], s[3]),
            DimOrder::Nhwc => (s[3], s[1], s[2]),
        }
    }
}

impl ImageSource for TensorView<'_> {
    fn width(&self) -> usize {
        self.chw().2
    }

    fn height(&self) -> usize {
        self.chw().1
    }

    fn channels(&self) -> usize {
        self.chw().0
    }

    fn sample(&self, x: usize, y: usize, c: usize) -> f32 {
        match self.order {
            DimOrder::Hw => self.view[&[y, x][..]],
            DimOrder::Chw => self.view[&[c, y, x][..]],
            DimOrder::Hwc => self.view[&[y, x, c][..]],
            DimOrder::Nchw => self.view[&[0, c, y, x][..]],
            DimOrder::Nhwc => self.view[&[0, y, x, c][..]],
        }
    }
}
