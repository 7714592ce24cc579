//! Persistence for shortcut bindings.
//!
//! Responsibilities:
//! - Locate the configuration directory.
//! - Read and write the binding list and "customized" flag through a `BindingStorage`.
//! - Decide the active set from persisted values and keep it in sync on change.
//! - Back up corrupt binding files before they are overwritten.
//!
//! Does NOT handle:
//! - Loading environment variables (see `loader`).
//! - Interactive recording of shortcuts (see the TUI crate).
//!
//! Invariants:
//! - Writes go data first, flag second; memory changes only after both succeed.
//! - Corrupt binding files are backed up before being overwritten.

use std::path::{Path, PathBuf};

mod path;
mod state;
mod storage;
mod store;

pub use path::{default_config_dir, resolve_config_dir};
pub use state::{Loaded, decode_bindings, encode_bindings};
pub use storage::{BindingStorage, FileStorage, MemoryStorage};
pub use store::{BindingStore, StoreError};

/// Creates a backup of a corrupt file before it is overwritten.
///
/// The original is renamed to a `.corrupt.{timestamp}` extension, so
/// `shortcuts.json` becomes `shortcuts.corrupt.1700000000`.
pub(crate) fn create_corrupt_backup(path: &Path) -> Result<PathBuf, std::io::Error> {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let backup_path = path.with_extension(format!("corrupt.{}", timestamp));
    std::fs::rename(path, &backup_path)?;

    Ok(backup_path)
}
