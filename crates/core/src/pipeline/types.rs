use std::path::PathBuf;

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Files copied into the success bucket under their new name.
    pub successes: u32,
    /// Files copied into the failed bucket under their original name.
    pub failures: u32,
    /// Where the report was written.
    pub report_path: PathBuf,
}
