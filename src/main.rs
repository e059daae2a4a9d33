//! Bitacora CLI
//!
//! # Usage
//!
//! ```bash
//! # Check a configuration
//! bitacora validate visualizer.yaml --detailed
//!
//! # Show where artifacts are written
//! bitacora info visualizer.yaml
//!
//! # Drive a synthetic training loop through the logger
//! bitacora demo visualizer.yaml --epochs 3 --iters 40
//! ```

use bitacora::cli::{run_command, Cli};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
