//! Error types for the router module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while routing a file into a bucket.
#[derive(Debug, Error)]
pub enum RouterError {
    /// Failed to create a bucket directory.
    #[error("Failed to create directory: {path}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to copy a file into a bucket.
    #[error("Failed to copy file from {source} to {destination}")]
    CopyFailed {
        source: PathBuf,
        destination: PathBuf,
        #[source]
        error: std::io::Error,
    },
}
