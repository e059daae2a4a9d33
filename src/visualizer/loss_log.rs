//! Append-only loss log file

use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Handle to `loss_log.txt`
///
/// The file is opened in append mode for each write and closed before the
/// call returns, so every line reaches the OS even if the process dies later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LossLog {
    path: PathBuf,
}

impl LossLog {
    /// Open (or create) the log and append a session header with the current time
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let log = Self { path: path.as_ref().to_path_buf() };
        log.append(&session_header())?;
        Ok(log)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `line` followed by a newline
    pub fn append(&self, line: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::io(format!("opening {}", self.path.display()), e))?;

        writeln!(file, "{line}")
            .map_err(|e| Error::io(format!("appending to {}", self.path.display()), e))
    }
}

/// `================ Training Loss (<local time>) ================`
pub fn session_header() -> String {
    let now = Local::now().format("%c");
    format!("================ Training Loss ({now}) ================")
}
