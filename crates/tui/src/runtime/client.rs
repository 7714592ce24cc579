//! Mail Zero client creation.
//!
//! Responsibilities:
//! - Build the shared API client from the loaded `ClientConfig`.
//!
//! Does NOT handle:
//! - Configuration loading (see `mailzero_config::ConfigLoader`).
//! - Terminal state management (see `runtime::terminal`).

use std::sync::Arc;

use anyhow::{Context, Result};
use mailzero_client::MailClient;
use mailzero_config::ClientConfig;

use crate::runtime::side_effects::SharedClient;

/// Create the client used by every side effect.
///
/// No request is made here; a missing or expired session surfaces when the
/// first `LoadSession` runs.
pub fn create_client(config: &ClientConfig) -> Result<SharedClient> {
    let client = MailClient::builder()
        .from_config(config)
        .build()
        .context("Failed to build Mail Zero client")?;
    tracing::info!(base_url = %client.base_url(), "Client created");
    Ok(Arc::new(client))
}
