//! Append-only record of per-file outcomes, exported as the run's report.

use chrono::Utc;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Failed to write report to {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Accumulates one line per processed file plus success/failure counters.
///
/// Counters and lines move together: every `record` call appends exactly one
/// line and bumps exactly one counter, so `successes + failures` always
/// equals the number of lines.
#[derive(Debug, Default)]
pub struct RunLedger {
    lines: Vec<String>,
    successes: u32,
    failures: u32,
}

impl RunLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an outcome line, prefixed by its kind.
    pub fn record(&mut self, message: String, success: bool) {
        let prefix = if success { "Success: " } else { "Failure: " };

        if success {
            self.successes += 1;
        } else {
            self.failures += 1;
        }

        self.lines.push(format!("{}{}", prefix, message));
    }

    pub fn successes(&self) -> u32 {
        self.successes
    }

    pub fn failures(&self) -> u32 {
        self.failures
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Write all lines to a timestamped report file inside `dir`.
    ///
    /// The report holds only the per-file lines; counters are for the
    /// operator's console and are never persisted.
    pub async fn export(&self, dir: &Path) -> Result<PathBuf, LedgerError> {
        let file_name = format!("event_log_{}.txt", Utc::now().format("%Y%m%d%H%M%S"));
        let path = dir.join(file_name);

        let mut contents = self.lines.join("\n");
        if !contents.is_empty() {
            contents.push('\n');
        }

        fs::write(&path, contents)
            .await
            .map_err(|e| LedgerError::WriteFailed {
                path: path.clone(),
                source: e,
            })?;

        Ok(path)
    }
}
