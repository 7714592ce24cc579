//! Error types for the Mail Zero client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success response from the server.
    ///
    /// `message` is the server's `error` field when the body carries one,
    /// otherwise the raw body.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Unauthorized access.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl ClientError {
    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// Short human-readable description for notifications.
    ///
    /// API errors yield only the server message; everything else uses the
    /// full display form.
    pub fn description(&self) -> String {
        match self {
            Self::ApiError { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
