//! Shortcut binding types and the built-in default table.
//!
//! Responsibilities:
//! - Define `ShortcutBinding` (action name + key tokens) and the ordered `BindingSet`.
//! - Provide the built-in `DEFAULT_KEYBOARD_SHORTCUTS` table.
//! - Reconcile a persisted binding list against the default action namespace.
//!
//! Does NOT handle:
//! - Key event normalization (see `keybind` module at crate root).
//! - Reading or writing persisted state (see `persistence`).
//!
//! Invariants:
//! - A `BindingSet` built by `defaults()` or `reconcile()` contains exactly the
//!   actions of the default table, in default-table order.
//! - Every binding in a `BindingSet` holds its chord in canonical order
//!   (modifiers Ctrl, Alt, Shift, Meta, then the key), the order `normalize` emits.
//! - Bindings serialize as `{ "action": ..., "keys": [...] }` with keys as plain token names.

use serde::{Deserialize, Serialize};

use crate::keybind::{KeyToken, Modifier, canonicalize, format_keys};

/// Built-in shortcuts: action name and key token names.
pub const DEFAULT_KEYBOARD_SHORTCUTS: &[(&str, &[&str])] = &[
    ("New Email", &["Meta", "n"]),
    ("Send Email", &["Meta", "Enter"]),
    ("Reply", &["Meta", "r"]),
    ("Reply All", &["Meta", "Shift", "r"]),
    ("Forward", &["Meta", "f"]),
    ("Drafts", &["Meta", "Shift", "d"]),
    ("Inbox", &["Meta", "Shift", "i"]),
    ("Sent Mail", &["Meta", "Shift", "s"]),
    ("Delete", &["Meta", "Backspace"]),
    ("Search", &["Meta", "/"]),
    ("Mark as Unread", &["Meta", "Shift", "u"]),
    ("Mute Thread", &["Meta", "Shift", "m"]),
    ("Print Email", &["Meta", "Shift", "p"]),
    ("Archive Email", &["Meta", "Shift", "h"]),
    ("Mark as Spam", &["Meta", "Shift", "j"]),
    ("Move to Folder", &["Meta", "Shift", "e"]),
    ("Undo Last Action", &["Meta", "Shift", "t"]),
    ("View Email Details", &["Meta", "Shift", "v"]),
    ("Go to Drafts", &["Meta", "Shift", "g"]),
    ("Expand Email View", &["Meta", "Shift", "x"]),
    ("Help with shortcuts", &["Meta", "?"]),
];

/// Action name of the compose shortcut.
pub const NEW_EMAIL_ACTION: &str = "New Email";

/// Action name of the shortcut help entry.
pub const HELP_ACTION: &str = "Help with shortcuts";

/// One action and the key chord bound to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutBinding {
    pub action: String,
    pub keys: Vec<KeyToken>,
}

impl ShortcutBinding {
    pub fn new(action: impl Into<String>, keys: Vec<KeyToken>) -> Self {
        Self {
            action: action.into(),
            keys,
        }
    }

    /// The display string of this binding's chord.
    pub fn display(&self) -> String {
        format_keys(&self.keys)
    }
}

/// Ordered set of all shortcut bindings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BindingSet {
    bindings: Vec<ShortcutBinding>,
}

impl Default for BindingSet {
    fn default() -> Self {
        Self::defaults()
    }
}

fn static_tokens(names: &[&str]) -> Vec<KeyToken> {
    canonicalize(
        names
            .iter()
            .map(|name| match Modifier::from_key_name(name) {
                Some(modifier) => KeyToken::Modifier(modifier),
                None => KeyToken::Key((*name).to_string()),
            })
            .collect(),
    )
}

/// Returns the default bindings in table order.
pub fn default_bindings() -> Vec<ShortcutBinding> {
    DEFAULT_KEYBOARD_SHORTCUTS
        .iter()
        .map(|(action, keys)| ShortcutBinding::new(*action, static_tokens(keys)))
        .collect()
}

/// Returns true if `action` names an entry of the default table.
pub fn is_known_action(action: &str) -> bool {
    DEFAULT_KEYBOARD_SHORTCUTS
        .iter()
        .any(|(name, _)| *name == action)
}

impl BindingSet {
    /// The built-in default set.
    pub fn defaults() -> Self {
        Self {
            bindings: default_bindings(),
        }
    }

    /// Build a set from a persisted list.
    ///
    /// Unknown actions are dropped and missing actions are restored from the
    /// defaults. When an action appears more than once, the first entry wins.
    pub fn reconcile(persisted: Vec<ShortcutBinding>) -> Self {
        let mut persisted = persisted;
        let bindings = default_bindings()
            .into_iter()
            .map(|default| {
                match persisted.iter().position(|b| b.action == default.action) {
                    Some(idx) => {
                        let stored = persisted.swap_remove(idx);
                        ShortcutBinding::new(stored.action, canonicalize(stored.keys))
                    }
                    None => default,
                }
            })
            .collect();

        for dropped in &persisted {
            if !is_known_action(&dropped.action) {
                tracing::debug!(action = %dropped.action, "Dropping unknown persisted shortcut");
            }
        }

        Self { bindings }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShortcutBinding> {
        self.bindings.iter()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn as_slice(&self) -> &[ShortcutBinding] {
        &self.bindings
    }

    /// Get the binding for an action.
    pub fn get(&self, action: &str) -> Option<&ShortcutBinding> {
        self.bindings.iter().find(|b| b.action == action)
    }

    /// Display string of an action's chord, if the action exists.
    pub fn display_for(&self, action: &str) -> Option<String> {
        self.get(action).map(ShortcutBinding::display)
    }

    /// Find the action whose chord displays the same as `tokens`.
    pub fn find_action(&self, tokens: &[KeyToken]) -> Option<&str> {
        self.find_conflict(tokens, None)
    }

    /// Like `find_action`, but ignores `excluding` (the action being edited).
    pub fn find_conflict(&self, tokens: &[KeyToken], excluding: Option<&str>) -> Option<&str> {
        let display = format_keys(&canonicalize(tokens.to_vec()));
        self.bindings
            .iter()
            .filter(|b| Some(b.action.as_str()) != excluding)
            .find(|b| b.display() == display)
            .map(|b| b.action.as_str())
    }

    /// Returns a copy with one action rebound, or `None` for an unknown action.
    pub fn with_binding(&self, action: &str, keys: Vec<KeyToken>) -> Option<Self> {
        let idx = self.bindings.iter().position(|b| b.action == action)?;
        let mut next = self.clone();
        next.bindings[idx].keys = canonicalize(keys);
        Some(next)
    }
}
