//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, ValidateArgs, VisualizerConfig};

/// Format the resolved configuration as indented lines
pub fn format_config_summary(config: &VisualizerConfig) -> String {
    [
        format!("  Name: {}", config.name),
        format!("  Checkpoints dir: {}", config.checkpoints_dir.display()),
        format!("  Normalization: {:?}", config.normalization),
        format!("  Aspect ratio: {}", config.aspect_ratio),
        format!("  Display width: {}px", config.display_width),
    ]
    .join("\n")
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    let config = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;

    log(level, LogLevel::Normal, "Configuration is valid");

    if args.detailed {
        println!();
        println!("Configuration Summary:");
        println!("{}", format_config_summary(&config));
    }

    Ok(())
}
