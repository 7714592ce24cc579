//! Main Mail Zero API client and API methods.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `connections`: Connection listing and switching
//! - `session`: Session reading and updating
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//!
//! # Invariants
//! - `base_url` never ends with a slash.
//! - The client is cheap to clone; clones share the connection pool.

pub mod builder;

mod connections;
mod session;

use secrecy::{ExposeSecret, SecretString};

/// Mail Zero API client.
#[derive(Debug, Clone)]
pub struct MailClient {
    http: reqwest::Client,
    base_url: String,
    session_token: Option<SecretString>,
}

impl MailClient {
    /// Create a new client builder.
    pub fn builder() -> builder::MailClientBuilder {
        builder::MailClientBuilder::new()
    }

    /// Get the base URL of the server.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn token(&self) -> Option<&str> {
        self.session_token.as_ref().map(|t| t.expose_secret())
    }
}
