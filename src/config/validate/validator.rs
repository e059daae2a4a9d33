//! Configuration validation logic

use super::error::ValidationError;
use crate::config::schema::VisualizerConfig;

/// Validate a visualizer configuration
///
/// Checks:
/// - The experiment name is a single, non-empty path component
/// - Numeric values are in valid ranges
pub fn validate_config(config: &VisualizerConfig) -> Result<(), ValidationError> {
    let name = config.name.as_str();
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(ValidationError::InvalidName(config.name.clone()));
    }

    if !config.aspect_ratio.is_finite() || config.aspect_ratio <= 0.0 {
        return Err(ValidationError::InvalidAspectRatio(config.aspect_ratio));
    }

    if config.display_width == 0 {
        return Err(ValidationError::InvalidDisplayWidth(config.display_width));
    }

    Ok(())
}
