use thiserror::Error;

use crate::discover::DiscoverError;
use crate::ledger::LedgerError;
use crate::lookup::AuthError;
use crate::router::RouterError;

/// Fatal errors that abort a run.
///
/// Everything here short-circuits before or outside the per-file loop; a
/// single file's lookup failure is never one of these.
#[derive(Debug, Error)]
pub enum RunError {
    /// Target directory missing or unreadable.
    #[error("File discovery failed: {0}")]
    Discover(#[from] DiscoverError),

    /// The directory listing contained no processable files.
    #[error("None of the discovered files can be processed; file names must follow the '<school id>.pdf' format")]
    NoEligibleFiles,

    /// Token exchange failed; no file can be resolved without a token.
    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthError),

    /// Routing into the failed bucket broke down.
    #[error("File routing failed: {0}")]
    Router(#[from] RouterError),

    /// The report could not be written.
    #[error("Report export failed: {0}")]
    Ledger(#[from] LedgerError),
}
