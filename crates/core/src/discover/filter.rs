use regex_lite::Regex;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use super::types::CandidateFile;
use super::DiscoverError;

/// Returns the school id when `file_name` is processable.
///
/// A name is processable when it is a digit run followed by a literal
/// lowercase `.pdf` extension; everything else is skipped. The digits are
/// returned as-is, never round-tripped through an integer.
pub fn school_id(file_name: &str) -> Option<&str> {
    let pattern = Regex::new(r"^[0-9]+\.pdf$").expect("valid literal pattern");
    if !pattern.is_match(file_name) {
        return None;
    }
    file_name.strip_suffix(".pdf")
}

/// Lists the regular files directly inside `dir`.
///
/// Returns them sorted by path so runs are deterministic.
pub async fn discover_files(dir: &Path) -> Result<Vec<PathBuf>, DiscoverError> {
    if !dir.is_dir() {
        return Err(DiscoverError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let read_failed = |source| DiscoverError::ReadFailed {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(dir).await.map_err(read_failed)?;
    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(read_failed)? {
        let file_type = entry.file_type().await.map_err(read_failed)?;
        if file_type.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();

    Ok(files)
}

/// Keeps the files whose names are processable, extracting their school ids.
pub fn filter_candidates(files: &[PathBuf]) -> Vec<CandidateFile> {
    files
        .iter()
        .filter_map(|path| {
            let file_name = path.file_name()?.to_str()?;
            match school_id(file_name) {
                Some(id) => Some(CandidateFile {
                    path: path.clone(),
                    school_id: id.to_string(),
                }),
                None => {
                    debug!("Skipping {}: name does not match the '<school id>.pdf' format", file_name);
                    None
                }
            }
        })
        .collect()
}
