//! Error types for the gold chat client
//!
//! Uses thiserror for ergonomic error definitions.
//! Nothing here is fatal: every variant is turned into a log line, an
//! alert or a fallback message by the controller.

use thiserror::Error;

/// Custom Result type using our Error
pub type Result<T> = std::result::Result<T, ClientError>;

/// Transport, API and configuration errors
#[derive(Error, Debug)]
pub enum ClientError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network or request-building errors
    #[error("HTTP error: {0}")]
    Http(String),

    /// Non-2xx response from the backend
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Well-formed response missing a value we need
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// HTTP status for API errors
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        // Body decode failures are parse errors, not transport errors
        if err.is_decode() {
            ClientError::InvalidResponse(err.to_string())
        } else {
            ClientError::Http(err.to_string())
        }
    }
}

/// Purchase form validation failures
///
/// The `Display` text is shown to the user verbatim in a blocking alert.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Please enter your name")]
    MissingName,

    #[error("Please enter your email address")]
    MissingEmail,

    #[error("Please enter a valid amount greater than zero")]
    InvalidAmount,

    #[error("Minimum purchase amount is {0}")]
    BelowMinimum(String),
}
