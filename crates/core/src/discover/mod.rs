//! Discovery of processable PDF files in the target directory.

mod filter;
mod types;

pub use filter::{discover_files, filter_candidates, school_id};
pub use types::CandidateFile;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while discovering files.
#[derive(Debug, Error)]
pub enum DiscoverError {
    /// Target directory does not exist.
    #[error("The given directory {path} could not be found")]
    DirectoryNotFound { path: PathBuf },

    /// I/O error while listing the directory.
    #[error("Failed to read directory {path}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
