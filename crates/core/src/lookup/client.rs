//! REST implementation of the custom field source.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::config::Config;

use super::error::{AuthError, LookupError};
use super::selector::FieldSelector;
use super::traits::FieldSource;
use super::types::CustomFieldsCollection;

/// OAuth2 scope required by the REST API.
const REST_API_SCOPE: &str = "restapi";

/// Accept header the students endpoints expect.
const ACCEPT_HAL_JSON: &str = "application/hal+json";

/// Request timeout in seconds.
const TIMEOUT_SECS: u64 = 30;

/// Successful token exchange response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Error body the token endpoint returns on a failed exchange.
#[derive(Debug, Deserialize)]
struct TokenErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Custom field client for the school REST API.
///
/// Holds the bearer token obtained by [`authenticate`](FieldSource::authenticate)
/// and the write-once remote id of the configured field.
pub struct RestFieldClient {
    client: Client,
    config: Config,
    token: RwLock<Option<String>>,
    selector: RwLock<FieldSelector>,
}

impl RestFieldClient {
    /// Create a new client for the given configuration.
    pub fn new(config: Config) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            config,
            token: RwLock::new(None),
            selector: RwLock::new(FieldSelector::new()),
        }
    }

    /// The cached remote id of the custom field, if resolved yet.
    pub async fn field_id(&self) -> Option<i64> {
        self.selector.read().await.field_id()
    }

    /// Build the lookup path for one school id, targeting the cached field
    /// directly when its id is known.
    async fn field_path(&self, school_id: &str) -> String {
        let path = format!(
            "{}/students/{}/customFields",
            self.config.api_base(),
            school_id
        );
        match self.selector.read().await.field_id() {
            Some(id) => format!("{}/{}", path, id),
            None => path,
        }
    }
}

#[async_trait]
impl FieldSource for RestFieldClient {
    async fn authenticate(&self) -> Result<(), AuthError> {
        let token_url = self.config.token_url();
        info!("Authenticating {}...", self.config.rest_api_client_id);

        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", self.config.rest_api_client_id.as_str()),
            ("client_secret", self.config.rest_api_client_secret.as_str()),
            ("scope", REST_API_SCOPE),
        ];

        let response = self
            .client
            .post(&token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<TokenErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| body.chars().take(200).collect());
            return Err(AuthError::TokenExchangeFailed {
                status: status.as_u16(),
                message,
            });
        }

        let token_response: TokenResponse = response
            .json()
            .await
            .map_err(|e| AuthError::InvalidResponse(e.to_string()))?;

        let mut token = self.token.write().await;
        *token = Some(token_response.access_token);
        info!("Authenticated successfully");
        Ok(())
    }

    async fn resolve(&self, school_id: &str) -> Result<String, LookupError> {
        let token = self
            .token
            .read()
            .await
            .clone()
            .ok_or(LookupError::NotAuthenticated)?;

        let path = self.field_path(school_id).await;
        debug!("Retrieving custom field from {}", path);

        let response = self
            .client
            .get(&path)
            .bearer_auth(token)
            .header(header::ACCEPT, ACCEPT_HAL_JSON)
            .send()
            .await
            .map_err(|e| LookupError::Transport {
                path: path.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::BadStatus {
                path,
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let body = response.text().await.map_err(|e| LookupError::Transport {
            path: path.clone(),
            message: e.to_string(),
        })?;
        if body.is_empty() {
            return Err(LookupError::EmptyField { path });
        }

        let collection: CustomFieldsCollection =
            serde_json::from_str(&body).map_err(|e| LookupError::InvalidResponse {
                path: path.clone(),
                message: e.to_string(),
            })?;

        let mut selector = self.selector.write().await;
        let field = selector.select(
            &collection.custom_fields,
            &self.config.custom_field_name,
            &path,
        )?;

        match field.value.as_deref() {
            Some(value) if !value.is_empty() => Ok(value.to_string()),
            _ => Err(LookupError::EmptyField { path }),
        }
    }
}
