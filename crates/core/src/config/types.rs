use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration.
///
/// All fields are required for a run; missing values deserialize as empty so
/// that validation can report every problem at once rather than failing on
/// the first absent key.
#[derive(Clone, Deserialize, Serialize)]
pub struct Config {
    /// Base URL of the school site, e.g. "https://school.example.com".
    #[serde(default)]
    pub domain: String,
    /// OAuth2 client id for the REST API.
    #[serde(default)]
    pub rest_api_client_id: String,
    /// OAuth2 client secret for the REST API.
    #[serde(default)]
    pub rest_api_client_secret: String,
    /// Directory holding the PDF files to rename.
    #[serde(default)]
    pub target_directory: PathBuf,
    /// Name of the custom field whose value becomes the new file name.
    #[serde(default)]
    pub custom_field_name: String,
}

impl Config {
    /// Token endpoint derived from the domain.
    pub fn token_url(&self) -> String {
        format!("{}/auth/connect/token", self.domain.trim_end_matches('/'))
    }

    /// REST API base derived from the domain.
    pub fn api_base(&self) -> String {
        format!("{}/api", self.domain.trim_end_matches('/'))
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("domain", &self.domain)
            .field("rest_api_client_id", &self.rest_api_client_id)
            .field("rest_api_client_secret", &"[REDACTED]")
            .field("target_directory", &self.target_directory)
            .field("custom_field_name", &self.custom_field_name)
            .finish()
    }
}
