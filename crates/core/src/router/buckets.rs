use std::path::{Path, PathBuf};

const SUCCESS_DIR: &str = "Success";
const FAILED_DIR: &str = "Failed";

/// Destination directories for processed files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultBuckets {
    pub success: PathBuf,
    pub failed: PathBuf,
}

impl ResultBuckets {
    /// Resolve the buckets for a run.
    ///
    /// Normally both live under `<target>/<field_name>/`. When the target
    /// directory already ends with `<field_name>/Failed` the operator is
    /// re-running a previous run's failures: the target itself is the failed
    /// bucket and the success bucket is its sibling, so repeated runs never
    /// nest `Failed/Failed/...`.
    pub fn resolve(target_dir: &Path, field_name: &str) -> Self {
        let failed_suffix = format!("{}/{}", field_name, FAILED_DIR);

        if path_ends_with(&target_dir.to_string_lossy(), &failed_suffix) {
            let success = match target_dir.parent() {
                Some(parent) => parent.join(SUCCESS_DIR),
                None => PathBuf::from(SUCCESS_DIR),
            };
            Self {
                success,
                failed: target_dir.to_path_buf(),
            }
        } else {
            let base = target_dir.join(field_name);
            Self {
                success: base.join(SUCCESS_DIR),
                failed: base.join(FAILED_DIR),
            }
        }
    }
}

/// Whether `dir` already ends with `suffix`, comparing case-insensitively
/// with separators normalized to `/` and outer separators trimmed.
///
/// Pure string predicate, deliberately independent of the filesystem.
pub fn path_ends_with(dir: &str, suffix: &str) -> bool {
    let normalize = |s: &str| s.replace('\\', "/").trim_matches('/').to_lowercase();
    normalize(dir).ends_with(&normalize(suffix))
}
