//! Backend service error types.

use thiserror::Error;

/// Errors that can occur when calling the customers or orders backend.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Client configuration was rejected.
    #[error("Invalid client configuration: {0}")]
    Config(String),
}
