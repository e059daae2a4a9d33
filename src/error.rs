//! Error types with actionable diagnostics.
//!
//! Every failure of the logger surfaces to the caller: nothing is retried
//! or swallowed, so a training loop halts on persistent storage problems.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ValidationError;

/// Result type alias for bitacora operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while writing training artifacts.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// PNG encoding or resizing failed.
    #[error("Failed to write image {}: {source}\n  → Check that the directory exists and is writable", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Image has a channel count that has no display mode.
    #[error("Unsupported channel count: {channels}\n  → Supported: 1 (L), 2 (LA), 3 (RGB), 4 (RGBA)")]
    UnsupportedChannels { channels: usize },

    /// Image has no pixels.
    #[error("Empty image: {width}x{height}\n  → Images need at least one pixel to be saved")]
    EmptyImage { width: usize, height: usize },

    /// Tensor rank or batch size does not match the requested layout.
    #[error("Tensor shape mismatch for {layout}: got {actual:?}\n  → {expected}")]
    InvalidShape {
        layout: String,
        expected: String,
        actual: Vec<usize>,
    },

    /// `save_images` was called without any path to derive a name from.
    #[error("No image path given\n  → Pass at least one source path to derive the sample name")]
    MissingImagePath,

    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration parsed but holds invalid values.
    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),
}

impl Error {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    /// Check if this error is caused by caller input rather than the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedChannels { .. }
                | Self::EmptyImage { .. }
                | Self::InvalidShape { .. }
                | Self::MissingImagePath
                | Self::Config(_)
                | Self::Validation(_)
        )
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "E001",
            Self::Validation(_) => "E003",
            Self::UnsupportedChannels { .. } => "E011",
            Self::EmptyImage { .. } => "E012",
            Self::InvalidShape { .. } => "E040",
            Self::MissingImagePath => "E041",
            Self::Io { .. } => "E050",
            Self::Image { .. } => "E052",
        }
    }
}
