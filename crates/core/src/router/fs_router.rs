//! File system router implementation.

use std::path::Path;
use tokio::fs;

use crate::ledger::RunLedger;

use super::buckets::ResultBuckets;
use super::error::RouterError;
use super::types::ResolutionOutcome;

/// Copies processed files into their bucket and records the outcome.
///
/// Files are always copied, never moved; the source tree is left untouched.
/// Bucket directories are created lazily on first use. Copies overwrite, so
/// re-running over an earlier run's output never fails on existing files.
pub struct ResultRouter {
    buckets: ResultBuckets,
}

impl ResultRouter {
    pub fn new(buckets: ResultBuckets) -> Self {
        Self { buckets }
    }

    pub fn buckets(&self) -> &ResultBuckets {
        &self.buckets
    }

    /// Route one file according to its outcome, appending the ledger line.
    pub async fn route(
        &self,
        ledger: &mut RunLedger,
        source: &Path,
        outcome: &ResolutionOutcome,
    ) -> Result<(), RouterError> {
        match outcome {
            ResolutionOutcome::Success { value } => {
                self.route_success(ledger, source, value).await
            }
            ResolutionOutcome::Failure { reason } => {
                self.route_failure(ledger, source, reason).await
            }
        }
    }

    async fn route_success(
        &self,
        ledger: &mut RunLedger,
        source: &Path,
        value: &str,
    ) -> Result<(), RouterError> {
        let destination = self.buckets.success.join(format!("{}.pdf", value));

        ensure_dir(&self.buckets.success).await?;
        copy_file(source, &destination).await?;

        ledger.record(
            format!("{} => {}", file_name_of(source), file_name_of(&destination)),
            true,
        );
        Ok(())
    }

    async fn route_failure(
        &self,
        ledger: &mut RunLedger,
        source: &Path,
        reason: &str,
    ) -> Result<(), RouterError> {
        let destination = self.buckets.failed.join(file_name_of(source));

        ensure_dir(&self.buckets.failed).await?;
        // When the target directory already is the failed bucket (rerun of
        // previous failures) source and destination coincide; skip the copy.
        if destination.as_path() != source {
            copy_file(source, &destination).await?;
        }

        ledger.record(
            format!("{} failed to be renamed. [{}]", file_name_of(source), reason),
            false,
        );
        Ok(())
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

async fn ensure_dir(path: &Path) -> Result<(), RouterError> {
    fs::create_dir_all(path)
        .await
        .map_err(|e| RouterError::DirectoryCreationFailed {
            path: path.to_path_buf(),
            source: e,
        })
}

async fn copy_file(source: &Path, destination: &Path) -> Result<(), RouterError> {
    fs::copy(source, destination)
        .await
        .map(|_| ())
        .map_err(|e| RouterError::CopyFailed {
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
            error: e,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn router_for(target: &Path) -> ResultRouter {
        ResultRouter::new(ResultBuckets::resolve(target, "CustomField"))
    }

    #[tokio::test]
    async fn test_route_success_copies_with_new_name() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("123.pdf");
        fs::write(&source, b"pdf bytes").await.unwrap();

        let router = router_for(temp.path());
        let mut ledger = RunLedger::new();
        let outcome = ResolutionOutcome::Success {
            value: "Jane Doe".to_string(),
        };
        router.route(&mut ledger, &source, &outcome).await.unwrap();

        let renamed = temp.path().join("CustomField/Success/Jane Doe.pdf");
        assert!(renamed.exists());
        // Copy, not move: the original stays where it was.
        assert!(source.exists());
        assert_eq!(ledger.successes(), 1);
    }

    #[tokio::test]
    async fn test_route_success_overwrites_existing_destination() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("123.pdf");
        fs::write(&source, b"new").await.unwrap();

        let success_dir = temp.path().join("CustomField/Success");
        fs::create_dir_all(&success_dir).await.unwrap();
        let existing = success_dir.join("Jane Doe.pdf");
        fs::write(&existing, b"old").await.unwrap();

        let router = router_for(temp.path());
        let mut ledger = RunLedger::new();
        let outcome = ResolutionOutcome::Success {
            value: "Jane Doe".to_string(),
        };
        router.route(&mut ledger, &source, &outcome).await.unwrap();

        let content = fs::read(&existing).await.unwrap();
        assert_eq!(content, b"new");
    }

    #[tokio::test]
    async fn test_route_failure_copies_unchanged() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("456.pdf");
        fs::write(&source, b"pdf bytes").await.unwrap();

        let router = router_for(temp.path());
        let mut ledger = RunLedger::new();
        let outcome = ResolutionOutcome::Failure {
            reason: "[404] Not Found".to_string(),
        };
        router.route(&mut ledger, &source, &outcome).await.unwrap();

        assert!(temp.path().join("CustomField/Failed/456.pdf").exists());
        assert!(source.exists());
        assert_eq!(ledger.failures(), 1);
    }

    #[tokio::test]
    async fn test_route_failure_in_rerun_skips_self_copy() {
        let temp = TempDir::new().unwrap();
        let failed_dir = temp.path().join("CustomField").join("Failed");
        fs::create_dir_all(&failed_dir).await.unwrap();
        let source = failed_dir.join("456.pdf");
        fs::write(&source, b"pdf bytes").await.unwrap();

        // Target directory is the previous run's failed bucket.
        let router = router_for_rerun(&failed_dir);
        let mut ledger = RunLedger::new();
        let outcome = ResolutionOutcome::Failure {
            reason: "still failing".to_string(),
        };
        router.route(&mut ledger, &source, &outcome).await.unwrap();

        assert!(source.exists());
        assert!(!failed_dir.join("CustomField").exists());
        assert_eq!(ledger.failures(), 1);
    }

    fn router_for_rerun(failed_dir: &Path) -> ResultRouter {
        ResultRouter::new(ResultBuckets::resolve(failed_dir, "CustomField"))
    }

    #[tokio::test]
    async fn test_route_ledger_lines() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("123.pdf");
        fs::write(&source, b"x").await.unwrap();

        let router = router_for(temp.path());
        let mut ledger = RunLedger::new();
        router
            .route(
                &mut ledger,
                &source,
                &ResolutionOutcome::Success {
                    value: "Jane Doe".to_string(),
                },
            )
            .await
            .unwrap();
        router
            .route(
                &mut ledger,
                &source,
                &ResolutionOutcome::Failure {
                    reason: "boom".to_string(),
                },
            )
            .await
            .unwrap();

        let lines = ledger.lines();
        assert_eq!(lines[0], "Success: 123.pdf => Jane Doe.pdf");
        assert_eq!(lines[1], "Failure: 123.pdf failed to be renamed. [boom]");
    }
}
