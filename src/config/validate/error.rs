//! Validation error types

/// Validation error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Experiment name must not be empty")]
    EmptyName,

    #[error("Invalid experiment name: {0:?} (must be a single directory name)")]
    InvalidName(String),

    #[error("Invalid aspect ratio: {0} (must be finite and > 0.0)")]
    InvalidAspectRatio(f32),

    #[error("Invalid display width: {0} (must be > 0)")]
    InvalidDisplayWidth(u32),
}
