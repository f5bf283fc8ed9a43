//! Error types for the lookup module.

use thiserror::Error;

/// Errors from the client-credentials token exchange. All of these are fatal
/// to the run: without a token no file can be resolved.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The token endpoint answered with a non-success status.
    #[error("[{status}] Error authenticating [{message}]")]
    TokenExchangeFailed { status: u16, message: String },

    /// The token request never completed.
    #[error("Token request failed: {0}")]
    Transport(String),

    /// The token endpoint answered with a body we could not parse.
    #[error("Failed to parse token response: {0}")]
    InvalidResponse(String),
}

/// Errors from resolving a single custom field value. These are contained at
/// the per-file boundary and never abort the batch.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The API answered with a non-success status.
    #[error("[{status}] Error retrieving the custom field value at {path} [{reason}]")]
    BadStatus {
        path: String,
        status: u16,
        reason: String,
    },

    /// Request succeeded but there is no usable field value.
    #[error("Request to {path} succeeded but the custom field is empty")]
    EmptyField { path: String },

    /// Request succeeded but no field with the configured name exists.
    #[error("Request to {path} succeeded but custom field '{name}' could not be found")]
    FieldNotFound { path: String, name: String },

    /// The request never completed.
    #[error("Request to {path} failed: {message}")]
    Transport { path: String, message: String },

    /// The response body was not a custom field collection.
    #[error("Failed to parse custom fields from {path}: {message}")]
    InvalidResponse { path: String, message: String },

    /// `resolve` was called before `authenticate`.
    #[error("Authenticate must be called before resolving custom fields")]
    NotAuthenticated,
}
