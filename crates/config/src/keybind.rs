//! Key chord normalization and display formatting.
//!
//! Responsibilities:
//! - Turn a raw key event into a canonical, ordered token sequence.
//! - Render token sequences as display strings (the identity used for conflict checks).
//! - Parse the string tokens used by the default table and by persisted state.
//!
//! Does NOT handle:
//! - Integration with crossterm (that's in the TUI crate).
//! - Recording state, Backspace/Enter/Escape handling (see the TUI `recorder` module).
//!
//! Invariants:
//! - Modifiers always come first, in the order Ctrl, Alt, Shift, Meta.
//! - `format_keys` is a pure function of the token sequence.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when parsing key tokens.
#[derive(Debug, Error, PartialEq)]
pub enum KeybindError {
    /// A token with no key name
    #[error("Empty key name in shortcut")]
    EmptyKey,

    /// A shortcut containing only modifiers
    #[error("Invalid shortcut: '{keys}' has no non-modifier key")]
    ModifierOnly {
        /// The offending shortcut, formatted for display
        keys: String,
    },
}

/// A modifier key, declared in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modifier {
    Ctrl,
    Alt,
    Shift,
    Meta,
}

impl Modifier {
    /// All modifiers in canonical order.
    pub const ALL: [Modifier; 4] = [Self::Ctrl, Self::Alt, Self::Shift, Self::Meta];

    /// The token name used in the default table and persisted state.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ctrl => "Ctrl",
            Self::Alt => "Alt",
            Self::Shift => "Shift",
            Self::Meta => "Meta",
        }
    }

    /// The display glyph for this modifier.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Meta => "⌘",
            other => other.name(),
        }
    }

    /// Resolve a key name reported by the platform into a modifier.
    ///
    /// Browsers and most key event sources report Ctrl as `"Control"`;
    /// both spellings are accepted.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "Ctrl" | "Control" => Some(Self::Ctrl),
            "Alt" => Some(Self::Alt),
            "Shift" => Some(Self::Shift),
            "Meta" => Some(Self::Meta),
            _ => None,
        }
    }
}

/// A semantic key token: a modifier or a single non-modifier key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum KeyToken {
    /// A named modifier
    Modifier(Modifier),
    /// A non-modifier key (letter, punctuation, or named key such as `ArrowUp`)
    Key(String),
}

impl KeyToken {
    /// Parse a single token name.
    ///
    /// # Examples
    ///
    /// ```
    /// use mailzero_config::keybind::{KeyToken, Modifier};
    ///
    /// assert_eq!(KeyToken::parse("Meta").unwrap(), KeyToken::Modifier(Modifier::Meta));
    /// assert_eq!(KeyToken::parse("n").unwrap(), KeyToken::Key("n".to_string()));
    /// ```
    pub fn parse(name: &str) -> Result<Self, KeybindError> {
        if name.is_empty() {
            return Err(KeybindError::EmptyKey);
        }
        Ok(match Modifier::from_key_name(name) {
            Some(modifier) => Self::Modifier(modifier),
            None => Self::Key(name.to_string()),
        })
    }

    /// Returns true if this token is a modifier.
    pub fn is_modifier(&self) -> bool {
        matches!(self, Self::Modifier(_))
    }

    /// The raw token name.
    pub fn name(&self) -> &str {
        match self {
            Self::Modifier(m) => m.name(),
            Self::Key(k) => k,
        }
    }

    /// The display form of this token.
    pub fn display(&self) -> &str {
        match self {
            Self::Modifier(m) => m.glyph(),
            Self::Key(k) => match k.as_str() {
                "ArrowUp" => "↑",
                "ArrowDown" => "↓",
                "ArrowLeft" => "←",
                "ArrowRight" => "→",
                " " => "Space",
                other => other,
            },
        }
    }
}

impl fmt::Display for KeyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<String> for KeyToken {
    type Error = KeybindError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<KeyToken> for String {
    fn from(token: KeyToken) -> Self {
        token.name().to_string()
    }
}

/// A platform-neutral key press: the principal key name plus modifier flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawKeyEvent {
    /// The principal key name (e.g. `"n"`, `"Enter"`, `"Control"`, `" "`)
    pub key: String,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl RawKeyEvent {
    /// Create an event with no modifiers held.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn meta(mut self) -> Self {
        self.meta = true;
        self
    }

    /// Returns true if the given modifier flag is held.
    pub fn holds(&self, modifier: Modifier) -> bool {
        match modifier {
            Modifier::Ctrl => self.ctrl,
            Modifier::Alt => self.alt,
            Modifier::Shift => self.shift,
            Modifier::Meta => self.meta,
        }
    }
}

/// Keys that never produce a token while recording.
pub const IGNORED_KEYS: &[&str] = &[
    "CapsLock",
    "NumLock",
    "ScrollLock",
    "OS",
    "AudioVolumeMute",
    "AudioVolumeDown",
    "AudioVolumeUp",
    "ContextMenu",
    "Insert",
    "PageUp",
    "PageDown",
    "Home",
    "End",
    "Pause",
    "PrintScreen",
];

/// Returns true if the key is on the ignore list.
pub fn is_ignored_key(key: &str) -> bool {
    IGNORED_KEYS.contains(&key)
}

/// Normalize a raw key event into canonical tokens.
///
/// Active modifier flags are emitted in the order Ctrl, Alt, Shift, Meta,
/// followed by the principal key unless it is itself a modifier.
///
/// # Examples
///
/// ```
/// use mailzero_config::keybind::{format_keys, normalize, RawKeyEvent};
///
/// let tokens = normalize(&RawKeyEvent::new("n").meta().ctrl());
/// assert_eq!(format_keys(&tokens), "Ctrl+⌘+n");
/// ```
pub fn normalize(event: &RawKeyEvent) -> Vec<KeyToken> {
    let mut tokens: Vec<KeyToken> = Modifier::ALL
        .into_iter()
        .filter(|m| event.holds(*m))
        .map(KeyToken::Modifier)
        .collect();

    if !event.key.is_empty() && Modifier::from_key_name(&event.key).is_none() {
        let principal = KeyToken::Key(event.key.clone());
        if !tokens.contains(&principal) {
            tokens.push(principal);
        }
    }

    tokens
}

/// Reorder a token sequence into the order `normalize` produces.
///
/// Modifiers move to the front in the order Ctrl, Alt, Shift, Meta (each at
/// most once); non-modifier keys follow in their original order.
///
/// # Examples
///
/// ```
/// use mailzero_config::keybind::{canonicalize, format_keys, parse_keys};
///
/// let tokens = canonicalize(parse_keys(&["Meta", "Shift", "i"]).unwrap());
/// assert_eq!(format_keys(&tokens), "Shift+⌘+i");
/// ```
pub fn canonicalize(tokens: Vec<KeyToken>) -> Vec<KeyToken> {
    let (modifiers, keys): (Vec<KeyToken>, Vec<KeyToken>) =
        tokens.into_iter().partition(KeyToken::is_modifier);

    let mut canonical: Vec<KeyToken> = Modifier::ALL
        .into_iter()
        .map(KeyToken::Modifier)
        .filter(|m| modifiers.contains(m))
        .collect();
    canonical.extend(keys);
    canonical
}

/// Format tokens as a display string, joined with `+`.
pub fn format_keys(tokens: &[KeyToken]) -> String {
    tokens
        .iter()
        .map(KeyToken::display)
        .collect::<Vec<_>>()
        .join("+")
}

/// Parse a list of token names (as found in the default table).
pub fn parse_keys(names: &[&str]) -> Result<Vec<KeyToken>, KeybindError> {
    names.iter().map(|name| KeyToken::parse(name)).collect()
}

/// Returns true if the sequence is non-empty and holds only modifiers.
pub fn is_modifier_only(tokens: &[KeyToken]) -> bool {
    !tokens.is_empty() && tokens.iter().all(KeyToken::is_modifier)
}

/// Check that a sequence is a committable chord.
pub fn validate_chord(tokens: &[KeyToken]) -> Result<(), KeybindError> {
    if is_modifier_only(tokens) {
        return Err(KeybindError::ModifierOnly {
            keys: format_keys(tokens),
        });
    }
    Ok(())
}
