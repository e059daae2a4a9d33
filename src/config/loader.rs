//! Loading configuration files from disk

use super::schema::VisualizerConfig;
use super::validate::validate_config;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Load, parse and validate a YAML configuration file
///
/// # Example
///
/// ```no_run
/// use bitacora::load_config;
///
/// let config = load_config("visualizer.yaml")?;
/// println!("{}", config.log_path().display());
/// # Ok::<(), bitacora::Error>(())
/// ```
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<VisualizerConfig> {
    let yaml_content = fs::read_to_string(config_path.as_ref()).map_err(|e| {
        Error::Config(format!(
            "Failed to read config file {}: {}",
            config_path.as_ref().display(),
            e
        ))
    })?;

    let config = parse_config(&yaml_content)?;
    validate_config(&config)?;

    Ok(config)
}

/// Parse a YAML document without validating it
pub fn parse_config(yaml: &str) -> Result<VisualizerConfig> {
    serde_yaml::from_str(yaml).map_err(|e| Error::Config(format!("Failed to parse YAML config: {e}")))
}
