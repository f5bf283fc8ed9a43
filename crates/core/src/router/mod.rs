//! Routing of processed files into their Success/Failed buckets.

mod buckets;
mod error;
mod fs_router;
mod types;

pub use buckets::{path_ends_with, ResultBuckets};
pub use error::RouterError;
pub use fs_router::ResultRouter;
pub use types::ResolutionOutcome;
