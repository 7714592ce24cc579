//! Write-through store for the active shortcut bindings.
//!
//! Responsibilities:
//! - Load the active set from a `BindingStorage`, seeding defaults when not customized.
//! - Apply `reset` and `update`, persisting data first and the customized flag second.
//! - Answer lookups (binding, display string, chord → action).
//!
//! Does NOT handle:
//! - Validation of recorded chords (see the TUI recorder).
//!
//! Invariants:
//! - In-memory state changes only after every storage write succeeded.
//! - The set always holds exactly the default action names.

use thiserror::Error;

use super::state::{Loaded, decode_bindings, encode_bindings};
use super::storage::BindingStorage;
use crate::keybind::KeyToken;
use crate::types::{BindingSet, ShortcutBinding};

/// Errors that can occur when changing the binding set.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Unknown shortcut action: {0}")]
    UnknownAction(String),

    #[error("Failed to encode shortcuts: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to save shortcuts: {0}")]
    Write(#[from] std::io::Error),
}

/// Active shortcut bindings backed by a storage.
#[derive(Debug)]
pub struct BindingStore<S> {
    storage: S,
    set: BindingSet,
    customized: bool,
}

impl<S: BindingStorage> BindingStore<S> {
    /// Open a store and load its state.
    pub fn open(storage: S) -> Self {
        let mut store = Self {
            storage,
            set: BindingSet::defaults(),
            customized: false,
        };
        store.load();
        store
    }

    /// Reload from storage.
    ///
    /// Read errors fall back to defaults. A customized but undecodable
    /// binding list is quarantined. When the result is not customized the
    /// defaults are written back (best effort).
    pub fn load(&mut self) -> &BindingSet {
        let customized = self.storage.read_customized().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to read shortcut flag, using defaults");
            None
        });
        let bytes = self.storage.read_bindings().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to read shortcuts, using defaults");
            None
        });

        if customized == Some(true)
            && let Some(data) = bytes.as_deref()
            && let Err(e) = decode_bindings(data)
        {
            tracing::warn!(error = %e, "Persisted shortcuts are corrupt");
            if let Err(e) = self.storage.quarantine_bindings() {
                tracing::warn!(error = %e, "Failed to back up corrupt shortcuts");
            }
        }

        let loaded = Loaded::from_persisted(bytes.as_deref(), customized);
        if !loaded.customized {
            self.seed_defaults(&loaded.set, customized);
        }

        tracing::debug!(customized = loaded.customized, "Shortcuts loaded");
        self.set = loaded.set;
        self.customized = loaded.customized;
        &self.set
    }

    /// Write the defaults back, then clear a stale `true` flag so the next
    /// load agrees with this one.
    fn seed_defaults(&mut self, set: &BindingSet, stored_flag: Option<bool>) {
        let result = encode_bindings(set)
            .map_err(StoreError::from)
            .and_then(|data| Ok(self.storage.write_bindings(&data)?))
            .and_then(|()| {
                if stored_flag == Some(true) {
                    self.storage.write_customized(false)?;
                }
                Ok(())
            });
        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to seed default shortcuts");
        }
    }

    /// Replace the set with the defaults and clear the customized flag.
    pub fn reset(&mut self) -> Result<&BindingSet, StoreError> {
        let defaults = BindingSet::defaults();
        self.persist(&defaults, false)?;
        self.set = defaults;
        self.customized = false;
        tracing::info!("Shortcuts reset to defaults");
        Ok(&self.set)
    }

    /// Rebind one action and mark the set customized.
    pub fn update(&mut self, action: &str, keys: Vec<KeyToken>) -> Result<&BindingSet, StoreError> {
        let next = self
            .set
            .with_binding(action, keys)
            .ok_or_else(|| StoreError::UnknownAction(action.to_string()))?;
        self.persist(&next, true)?;
        self.set = next;
        self.customized = true;
        tracing::info!(action, keys = ?self.set.display_for(action), "Shortcut updated");
        Ok(&self.set)
    }

    fn persist(&mut self, set: &BindingSet, customized: bool) -> Result<(), StoreError> {
        let data = encode_bindings(set)?;
        self.storage.write_bindings(&data)?;
        self.storage.write_customized(customized)?;
        Ok(())
    }

    pub fn bindings(&self) -> &BindingSet {
        &self.set
    }

    pub fn is_customized(&self) -> bool {
        self.customized
    }

    pub fn binding(&self, action: &str) -> Option<&ShortcutBinding> {
        self.set.get(action)
    }

    pub fn display_for(&self, action: &str) -> Option<String> {
        self.set.display_for(action)
    }

    /// The action bound to a chord, compared by display string.
    pub fn find_action(&self, keys: &[KeyToken]) -> Option<&str> {
        self.set.find_action(keys)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }
}
