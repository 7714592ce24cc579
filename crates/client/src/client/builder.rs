//! Client builder for constructing [`MailClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, redirects)
//!
//! # Invariants
//! - `base_url` is required and must be provided before calling `build()`

use std::time::Duration;

use secrecy::SecretString;

use crate::client::MailClient;
use crate::error::{ClientError, Result};
use mailzero_config::ClientConfig;
use mailzero_config::constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS};

/// Builder for creating a new [`MailClient`].
///
/// # Example
///
/// ```rust,ignore
/// let client = MailClient::builder()
///     .base_url("http://localhost:3000".to_string())
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
#[derive(Debug)]
pub struct MailClientBuilder {
    base_url: Option<String>,
    session_token: Option<SecretString>,
    timeout: Duration,
}

impl Default for MailClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            session_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl MailClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the server. Trailing slashes are removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the session token sent as a cookie.
    pub fn session_token(mut self, token: Option<SecretString>) -> Self {
        self.session_token = token;
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Pre-configure the builder from loaded client settings.
    pub fn from_config(mut self, config: &ClientConfig) -> Self {
        self.base_url = Some(config.base_url.clone());
        self.session_token = config.session_token.clone();
        self.timeout = config.timeout;
        self
    }

    /// - `"http://localhost:3000/"` -> `"http://localhost:3000"`
    /// - `"http://localhost:3000//"` -> `"http://localhost:3000"`
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`MailClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided or is empty.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<MailClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);
        if base_url.is_empty() {
            return Err(ClientError::InvalidUrl("base_url is empty".to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .build()?;

        tracing::debug!(base_url = %base_url, timeout = ?self.timeout, "Mail client built");

        Ok(MailClient {
            http,
            base_url,
            session_token: self.session_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_removed() {
        let client = MailClientBuilder::new()
            .base_url("http://localhost:3000//".to_string())
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_missing_base_url() {
        let err = MailClientBuilder::new().build().unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_from_config() {
        let config = ClientConfig {
            base_url: "https://mail.example.com".to_string(),
            session_token: Some(SecretString::new("tok".to_string().into())),
            timeout: Duration::from_secs(5),
        };
        let client = MailClientBuilder::new().from_config(&config).build().unwrap();
        assert_eq!(client.base_url(), "https://mail.example.com");
        assert_eq!(client.token(), Some("tok"));
    }
}
