/*
[INPUT]:  Error sources (HTTP, API status, argument checks, serialization)
[OUTPUT]: Structured error type shared by every client method
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Nobitex adapter
#[derive(Error, Debug)]
pub enum NobitexError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API error (code {code}): {message}")]
    Api { code: i32, message: String },

    /// Endpoint needs an API token and none was configured
    #[error("API token is required for this endpoint")]
    MissingToken,

    /// Caller passed an argument the endpoint cannot accept
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl NobitexError {
    /// Check if error indicates an authentication problem
    pub fn is_auth_error(&self) -> bool {
        match self {
            NobitexError::MissingToken => true,
            NobitexError::Api { code, .. } => *code == 401 || *code == 403,
            _ => false,
        }
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        NobitexError::Api {
            code: i32::from(status.as_u16()),
            message: message.into(),
        }
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        NobitexError::InvalidArgument(message.into())
    }
}

/// Result type alias for Nobitex operations
pub type Result<T> = std::result::Result<T, NobitexError>;
