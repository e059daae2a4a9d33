//! Info command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, InfoArgs, VisualizerConfig};
use crate::visualizer::epoch_image_name;

/// Describe where an experiment's artifacts end up
pub fn format_layout(config: &VisualizerConfig) -> String {
    [
        format!("Experiment: {}", config.name),
        format!("  Snapshots: {}", config.image_dir().join(epoch_image_name(1, 0, "<label>")).display()),
        format!("  Loss log:  {}", config.log_path().display()),
    ]
    .join("\n")
}

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let config = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;

    log(level, LogLevel::Normal, &format_layout(&config));
    log(
        level,
        LogLevel::Verbose,
        &format!("  Existing log: {}", config.log_path().exists()),
    );

    Ok(())
}
