//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! bitacora validate visualizer.yaml --detailed
//! bitacora info visualizer.yaml
//! bitacora demo visualizer.yaml --epochs 2 --iters 50 --display-freq 10 --print-freq 5
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bitacora: training artifact logger
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "bitacora")]
#[command(version)]
#[command(about = "Sample images, HTML galleries and loss logs for training loops")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Validate a configuration file
    Validate(ValidateArgs),

    /// Show where an experiment writes its artifacts
    Info(InfoArgs),

    /// Run a synthetic training loop through the logger
    Demo(DemoArgs),
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Show the resolved configuration
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}

/// Arguments for the demo command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct DemoArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Number of epochs to simulate
    #[arg(short, long, default_value_t = 2)]
    pub epochs: usize,

    /// Iterations per epoch
    #[arg(short, long, default_value_t = 20)]
    pub iters: usize,

    /// Force an image snapshot every N iterations
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub display_freq: u64,

    /// Record losses every N iterations
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    pub print_freq: u64,

    /// Override the checkpoint root directory
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

/// Parse command line arguments from an iterator
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
