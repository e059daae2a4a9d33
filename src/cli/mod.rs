//! CLI module for bitacora
//!
//! Command handlers and console output helpers for the `bitacora` binary.

mod commands;
mod logging;

pub use commands::run_command;
pub use logging::{init_tracing, LogLevel};

// Re-export Cli from config for convenience
pub use crate::config::Cli;
