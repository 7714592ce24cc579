//! Client connection settings.
//!
//! Responsibilities:
//! - Define `ClientConfig`: server base URL, optional session token and request timeout.
//!
//! Does NOT handle:
//! - Loading values from env/CLI (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - `base_url` never ends with a trailing slash once produced by `ConfigLoader::build`.
//! - The session token is only reachable through `secrecy::ExposeSecret`.

use std::time::Duration;

use secrecy::SecretString;

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Connection settings for the Mail Zero server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the server (e.g. `http://localhost:3000`)
    pub base_url: String,
    /// Session cookie value, if authenticated
    pub session_token: Option<SecretString>,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            session_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
