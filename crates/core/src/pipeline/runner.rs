//! Sequential pipeline runner.
//!
//! A run moves through fatal gates first (directory, eligible files,
//! authentication); once files are being processed, failures are contained
//! per file and the batch always runs to completion.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::discover::{discover_files, filter_candidates, CandidateFile};
use crate::ledger::RunLedger;
use crate::lookup::FieldSource;
use crate::router::{ResolutionOutcome, ResultBuckets, ResultRouter};

use super::error::RunError;
use super::types::RunSummary;

/// Drives one batch run end to end.
pub struct Pipeline<S: FieldSource> {
    target_directory: PathBuf,
    custom_field_name: String,
    source: S,
}

impl<S: FieldSource> Pipeline<S> {
    /// Create a pipeline over the given field source.
    pub fn new(config: &Config, source: S) -> Self {
        Self {
            target_directory: config.target_directory.clone(),
            custom_field_name: config.custom_field_name.clone(),
            source,
        }
    }

    /// Run the batch to completion.
    ///
    /// Fatal gates (missing directory, zero eligible files, failed
    /// authentication) abort before any file is touched and before any
    /// report is written. Per-file failures are recorded and do not stop
    /// the remaining files.
    pub async fn run(self) -> Result<RunSummary, RunError> {
        info!("Getting directory contents...");
        let files = discover_files(&self.target_directory).await?;

        let candidates = filter_candidates(&files);
        if candidates.is_empty() {
            return Err(RunError::NoEligibleFiles);
        }
        info!("{} files found", candidates.len());

        self.source.authenticate().await?;

        let buckets = ResultBuckets::resolve(&self.target_directory, &self.custom_field_name);
        let router = ResultRouter::new(buckets);
        let mut ledger = RunLedger::new();

        info!("Processing files...");
        let total = candidates.len();
        for (idx, candidate) in candidates.iter().enumerate() {
            debug!("Processing {} of {}", idx + 1, total);
            self.process_file(&router, &mut ledger, candidate).await?;
        }
        info!("File processing complete");

        let report_dir = router
            .buckets()
            .success
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.target_directory.clone());
        let report_path = ledger.export(&report_dir).await?;

        Ok(RunSummary {
            successes: ledger.successes(),
            failures: ledger.failures(),
            report_path,
        })
    }

    /// Resolve and route one file.
    ///
    /// Lookup errors and success-bucket copy errors both degrade into a
    /// Failure outcome for this file alone. An error while routing into the
    /// failed bucket has no further fallback and propagates.
    async fn process_file(
        &self,
        router: &ResultRouter,
        ledger: &mut RunLedger,
        candidate: &CandidateFile,
    ) -> Result<(), RunError> {
        match self.source.resolve(&candidate.school_id).await {
            Ok(value) => {
                let outcome = ResolutionOutcome::Success { value };
                if let Err(e) = router.route(ledger, &candidate.path, &outcome).await {
                    warn!(
                        "Something went wrong while processing {}: {}",
                        candidate.path.display(),
                        e
                    );
                    let failure = ResolutionOutcome::Failure {
                        reason: e.to_string(),
                    };
                    router.route(ledger, &candidate.path, &failure).await?;
                }
            }
            Err(e) => {
                warn!(
                    "Something went wrong while processing {}: {}",
                    candidate.path.display(),
                    e
                );
                let failure = ResolutionOutcome::Failure {
                    reason: e.to_string(),
                };
                router.route(ledger, &candidate.path, &failure).await?;
            }
        }
        Ok(())
    }
}
