//! Environment variable parsing for configuration.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Invalid numeric values return `ConfigError::InvalidValue`.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{ENV_BASE_URL, ENV_SESSION_TOKEN, ENV_TIMEOUT_SECS};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
///
/// Only fills values that were not already set by an explicit override.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if loader.base_url().is_none()
        && let Some(url) = env_var_or_none(ENV_BASE_URL)
    {
        loader.set_base_url(Some(url));
    }
    if loader.session_token().is_none()
        && let Some(token) = env_var_or_none(ENV_SESSION_TOKEN)
    {
        loader.set_session_token(Some(SecretString::new(token.into())));
    }
    if loader.timeout().is_none()
        && let Some(secs) = env_var_or_none(ENV_TIMEOUT_SECS)
    {
        let secs: u64 = secs.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TIMEOUT_SECS.to_string(),
            message: format!("must be a whole number of seconds, got: {secs}"),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    Ok(())
}
