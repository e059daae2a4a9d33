//! Logging utilities for CLI output

/// Log level for CLI output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Suppress all output
    Quiet,
    /// Normal output level
    Normal,
    /// Verbose output with additional details
    Verbose,
}

/// Log a message if the current level permits it
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if should_print(level, required) {
        println!("{msg}");
    }
}

fn should_print(level: LogLevel, required: LogLevel) -> bool {
    level != LogLevel::Quiet && (level == required || required == LogLevel::Normal)
}

/// Route library diagnostics (`log` records) to stderr when running verbose
///
/// Does nothing if a global subscriber is already installed.
pub fn init_tracing(level: LogLevel) {
    if level != LogLevel::Verbose {
        return;
    }

    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
