//! Visualizer configuration
//!
//! YAML-backed settings naming the experiment and where its artifacts live.

mod cli;
mod loader;
mod schema;
mod validate;

pub use cli::{parse_args, Cli, Command, DemoArgs, InfoArgs, ValidateArgs};
pub use loader::{load_config, parse_config};
pub use schema::{VisualizerConfig, IMAGE_DIR_NAME, LOSS_LOG_NAME};
pub use validate::{validate_config, ValidationError};
