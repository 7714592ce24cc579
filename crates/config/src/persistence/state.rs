//! Persisted shortcut state decoding.
//!
//! Responsibilities:
//! - Encode a `BindingSet` for storage.
//! - Decide the active set from raw persisted values (`Loaded::from_persisted`).
//!
//! Does NOT handle:
//! - Reading or writing storage (see `storage`, `store`).
//!
//! Invariants:
//! - `Loaded::from_persisted` is pure and never fails; anything unusable yields defaults.
//! - A set is only treated as customized when the flag is `true` AND the data decodes.

use crate::types::{BindingSet, ShortcutBinding};

/// Result of loading persisted shortcut state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded {
    pub set: BindingSet,
    pub customized: bool,
}

impl Loaded {
    fn defaults() -> Self {
        Self {
            set: BindingSet::defaults(),
            customized: false,
        }
    }

    /// Decide the active binding set from raw persisted values.
    ///
    /// - flag absent or `false`: defaults, not customized
    /// - flag `true` and data decodes: reconciled data, customized
    /// - flag `true` but data missing or corrupt: defaults, not customized
    pub fn from_persisted(bytes: Option<&[u8]>, customized: Option<bool>) -> Self {
        if customized != Some(true) {
            return Self::defaults();
        }
        match bytes.map(decode_bindings) {
            Some(Ok(bindings)) => Self {
                set: BindingSet::reconcile(bindings),
                customized: true,
            },
            _ => Self::defaults(),
        }
    }
}

/// Decode a persisted binding list.
pub fn decode_bindings(bytes: &[u8]) -> Result<Vec<ShortcutBinding>, serde_json::Error> {
    serde_json::from_slice(bytes)
}

/// Encode a binding set as pretty JSON.
pub fn encode_bindings(set: &BindingSet) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec_pretty(set)
}
