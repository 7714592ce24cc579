//! Shortcut recorder: the single-slot state machine behind rebinding.
//!
//! Responsibilities:
//! - Track which action (if any) is being rebound and the tentative chord.
//! - Interpret key presses while recording (cancel, erase, commit, capture).
//! - Validate a finished chord and write it through the `BindingStore`.
//!
//! Does NOT handle:
//! - Deciding whether a key press belongs to the recorder (see `App::handle_input`).
//! - Toasts or rendering (the App maps `RecorderEvent`s to feedback).
//!
//! Invariants:
//! - At most one action is recorded at a time; `begin_edit` discards any
//!   session already in progress.
//! - `commit` always leaves the recorder idle, whatever the outcome.
//! - Nothing is persisted unless the chord passed every check.

use mailzero_config::keybind::{
    KeyToken, RawKeyEvent, format_keys, is_ignored_key, normalize, validate_chord,
};
use mailzero_config::{BindingStorage, BindingStore, ShortcutBinding, StoreError};
use thiserror::Error;

/// Why a recorded chord was not saved.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("No keys were pressed")]
    NoKeysPressed,

    #[error("Invalid shortcut")]
    InvalidShortcut,

    #[error("Shortcut already in use!")]
    Duplicate {
        keys: String,
        conflicting_action: String,
    },

    #[error("No shortcut is being recorded")]
    NotRecording,

    #[error("Failed to save shortcut: {0}")]
    Persist(#[from] StoreError),
}

/// Recorder state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RecorderState {
    #[default]
    Idle,
    Editing {
        action: String,
        tentative: Vec<KeyToken>,
    },
}

/// Outcome of a key press delivered to the recorder.
#[derive(Debug)]
pub enum RecorderEvent {
    /// The recorder is idle; the key was not consumed.
    Inactive,
    /// The key is on the ignore list or has no name.
    Ignored,
    /// The tentative chord changed (or a repeated key left it as is).
    Updated,
    /// Recording was abandoned.
    Cancelled,
    /// The chord was validated and persisted.
    Committed(ShortcutBinding),
    /// The chord was rejected; nothing was persisted.
    Rejected(RecordError),
}

#[derive(Debug, Default)]
pub struct Recorder {
    state: RecorderState,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RecorderState {
        &self.state
    }

    pub fn is_recording(&self) -> bool {
        matches!(self.state, RecorderState::Editing { .. })
    }

    /// The action being rebound, if any.
    pub fn editing_action(&self) -> Option<&str> {
        match &self.state {
            RecorderState::Editing { action, .. } => Some(action),
            RecorderState::Idle => None,
        }
    }

    /// The chord captured so far (empty when idle).
    pub fn tentative(&self) -> &[KeyToken] {
        match &self.state {
            RecorderState::Editing { tentative, .. } => tentative,
            RecorderState::Idle => &[],
        }
    }

    /// Start recording a new chord for `action`.
    pub fn begin_edit(&mut self, action: impl Into<String>) {
        let action = action.into();
        if let Some(previous) = self.editing_action() {
            tracing::debug!(previous, next = %action, "Discarding unfinished shortcut edit");
        }
        tracing::debug!(action = %action, "Recording shortcut");
        self.state = RecorderState::Editing {
            action,
            tentative: Vec::new(),
        };
    }

    /// Abandon the current recording. Returns true if one was active.
    pub fn cancel(&mut self) -> bool {
        let was_recording = self.is_recording();
        if was_recording {
            tracing::debug!("Shortcut recording cancelled");
        }
        self.state = RecorderState::Idle;
        was_recording
    }

    /// Handle one key press while recording.
    pub fn handle_key<S: BindingStorage>(
        &mut self,
        event: &RawKeyEvent,
        store: &mut BindingStore<S>,
    ) -> RecorderEvent {
        let RecorderState::Editing { tentative, .. } = &mut self.state else {
            return RecorderEvent::Inactive;
        };

        match event.key.as_str() {
            "Escape" => {
                self.cancel();
                RecorderEvent::Cancelled
            }
            "Backspace" => {
                tentative.pop();
                RecorderEvent::Updated
            }
            "Enter" => match self.commit(store) {
                Ok(binding) => RecorderEvent::Committed(binding),
                Err(e) => RecorderEvent::Rejected(e),
            },
            key if is_ignored_key(key) => RecorderEvent::Ignored,
            key => {
                let Ok(principal) = KeyToken::parse(key) else {
                    return RecorderEvent::Ignored;
                };
                if !tentative.contains(&principal) {
                    *tentative = normalize(event);
                }
                RecorderEvent::Updated
            }
        }
    }

    /// Validate the tentative chord and persist it for the edited action.
    pub fn commit<S: BindingStorage>(
        &mut self,
        store: &mut BindingStore<S>,
    ) -> Result<ShortcutBinding, RecordError> {
        let RecorderState::Editing { action, tentative } = std::mem::take(&mut self.state) else {
            return Err(RecordError::NotRecording);
        };

        if tentative.is_empty() {
            return Err(RecordError::NoKeysPressed);
        }
        validate_chord(&tentative).map_err(|_| RecordError::InvalidShortcut)?;

        if let Some(conflicting) = store.bindings().find_conflict(&tentative, Some(&action)) {
            let keys = format_keys(&tentative);
            tracing::debug!(action = %action, keys = %keys, conflicting, "Shortcut already bound");
            return Err(RecordError::Duplicate {
                keys,
                conflicting_action: conflicting.to_string(),
            });
        }

        store.update(&action, tentative.clone())?;
        Ok(ShortcutBinding::new(action, tentative))
    }
}
