//! Mock field source for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::lookup::{AuthError, FieldSource, LookupError};

/// Configured behavior for one school id.
#[derive(Debug, Clone)]
enum MockLookup {
    /// Resolve to this value.
    Value(String),
    /// Fail with this HTTP status.
    Status(u16),
    /// Fail as if the configured field does not exist on the record.
    MissingField,
    /// Fail as if the field exists but its value is empty.
    EmptyValue,
}

/// Mock implementation of the FieldSource trait.
///
/// Provides controllable behavior for testing:
/// - Map school ids to values or failures
/// - Simulate a failing token exchange
/// - Track resolve calls for assertions
///
/// Clones share state, so a test can hand one clone to the pipeline and
/// keep another for assertions.
#[derive(Clone)]
pub struct MockFieldSource {
    /// Configured per-id behavior; unknown ids answer 404.
    lookups: Arc<RwLock<HashMap<String, MockLookup>>>,
    /// If set, authenticate fails with this status and message.
    auth_error: Arc<RwLock<Option<(u16, String)>>>,
    /// School ids passed to resolve, in call order.
    resolved_ids: Arc<RwLock<Vec<String>>>,
    /// Number of authenticate calls.
    auth_calls: Arc<RwLock<usize>>,
}

impl MockFieldSource {
    pub fn new() -> Self {
        Self {
            lookups: Arc::new(RwLock::new(HashMap::new())),
            auth_error: Arc::new(RwLock::new(None)),
            resolved_ids: Arc::new(RwLock::new(Vec::new())),
            auth_calls: Arc::new(RwLock::new(0)),
        }
    }

    /// Resolve `school_id` to `value`.
    pub async fn set_value(&self, school_id: &str, value: &str) {
        self.lookups.write().await.insert(
            school_id.to_string(),
            MockLookup::Value(value.to_string()),
        );
    }

    /// Fail `school_id` lookups with an HTTP status.
    pub async fn set_status(&self, school_id: &str, status: u16) {
        self.lookups
            .write()
            .await
            .insert(school_id.to_string(), MockLookup::Status(status));
    }

    /// Fail `school_id` lookups as a missing field.
    pub async fn set_missing_field(&self, school_id: &str) {
        self.lookups
            .write()
            .await
            .insert(school_id.to_string(), MockLookup::MissingField);
    }

    /// Fail `school_id` lookups as an empty value.
    pub async fn set_empty_value(&self, school_id: &str) {
        self.lookups
            .write()
            .await
            .insert(school_id.to_string(), MockLookup::EmptyValue);
    }

    /// Make authenticate fail with the given status and message.
    pub async fn set_auth_error(&self, status: u16, message: &str) {
        let mut auth_error = self.auth_error.write().await;
        *auth_error = Some((status, message.to_string()));
    }

    /// School ids resolved so far, in call order.
    pub async fn resolved_ids(&self) -> Vec<String> {
        self.resolved_ids.read().await.clone()
    }

    /// Number of authenticate calls so far.
    pub async fn auth_calls(&self) -> usize {
        *self.auth_calls.read().await
    }

    fn mock_path(school_id: &str) -> String {
        format!("mock://api/students/{}/customFields", school_id)
    }
}

impl Default for MockFieldSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FieldSource for MockFieldSource {
    async fn authenticate(&self) -> Result<(), AuthError> {
        let mut calls = self.auth_calls.write().await;
        *calls += 1;

        match self.auth_error.read().await.as_ref() {
            Some((status, message)) => Err(AuthError::TokenExchangeFailed {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    async fn resolve(&self, school_id: &str) -> Result<String, LookupError> {
        self.resolved_ids.write().await.push(school_id.to_string());

        let path = Self::mock_path(school_id);
        let lookup = self.lookups.read().await.get(school_id).cloned();
        match lookup {
            Some(MockLookup::Value(value)) => Ok(value),
            Some(MockLookup::Status(status)) => Err(LookupError::BadStatus {
                path,
                status,
                reason: reqwest::StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or("unknown")
                    .to_string(),
            }),
            Some(MockLookup::MissingField) => Err(LookupError::FieldNotFound {
                path,
                name: "CustomField".to_string(),
            }),
            Some(MockLookup::EmptyValue) => Err(LookupError::EmptyField { path }),
            None => Err(LookupError::BadStatus {
                path,
                status: 404,
                reason: "Not Found".to_string(),
            }),
        }
    }
}
