pub mod config;
pub mod discover;
pub mod ledger;
pub mod lookup;
pub mod pipeline;
pub mod router;
pub mod testing;

pub use config::{load_config, load_config_from_str, validate_config, Config, ConfigError};
pub use discover::{discover_files, filter_candidates, school_id, CandidateFile, DiscoverError};
pub use ledger::{LedgerError, RunLedger};
pub use lookup::{AuthError, FieldSource, LookupError, RestFieldClient};
pub use pipeline::{Pipeline, RunError, RunSummary};
pub use router::{ResolutionOutcome, ResultBuckets, ResultRouter, RouterError};
