//! Path helpers for persisted state locations.
//!
//! Responsibilities:
//! - Determine the platform config directory via the `directories` crate.
//! - Apply the `MAILZERO_CONFIG_DIR` and explicit overrides.
//!
//! Does NOT handle:
//! - File I/O operations (see `storage`).

use std::path::PathBuf;

use anyhow::Context;

use crate::constants::{APP_NAME, ENV_CONFIG_DIR};
use crate::loader::env_var_or_none;

/// Returns the default configuration directory.
///
/// - Linux: `~/.config/mailzero-tui`
/// - macOS: `~/Library/Application Support/mailzero-tui`
/// - Windows: `%AppData%\mailzero-tui\config`
pub fn default_config_dir() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().to_path_buf())
}

/// Resolve the configuration directory.
///
/// Precedence: explicit override (CLI), then `MAILZERO_CONFIG_DIR`, then the
/// platform default.
pub fn resolve_config_dir(explicit: Option<PathBuf>) -> Result<PathBuf, anyhow::Error> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    if let Some(dir) = env_var_or_none(ENV_CONFIG_DIR) {
        return Ok(PathBuf::from(dir));
    }
    default_config_dir()
}
