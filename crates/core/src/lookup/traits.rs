use async_trait::async_trait;

use super::error::{AuthError, LookupError};

/// Source of custom field values, one per school id.
#[async_trait]
pub trait FieldSource: Send + Sync {
    /// Obtain credentials for the run. Must succeed before any `resolve`
    /// call; the result is reused for the whole run.
    async fn authenticate(&self) -> Result<(), AuthError>;

    /// Resolve the configured custom field value for one school id.
    async fn resolve(&self, school_id: &str) -> Result<String, LookupError>;
}
