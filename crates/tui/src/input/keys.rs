//! Conversion from crossterm key events to platform-neutral key events.
//!
//! Responsibilities:
//! - Name keys the way the persisted shortcut table does (`"Escape"`,
//!   `"ArrowUp"`, `" "`, `"n"`).
//! - Map crossterm modifier flags onto `RawKeyEvent` flags.
//! - Recognize the global command palette hotkey.
//!
//! Does NOT handle:
//! - Deciding who owns a key press (see `App::handle_input`).
//! - Token normalization (see `mailzero_config::keybind::normalize`).
//!
//! Invariants:
//! - Uppercase ASCII letters are reported as lowercase with `shift` set.
//! - `BackTab` is reported as `Tab` with `shift` set.
//! - SUPER and META both map to the `meta` flag.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MediaKeyCode, ModifierKeyCode};
use mailzero_config::keybind::RawKeyEvent;

/// Key name for a crossterm key code, or `None` for keys with no name.
pub fn key_name(code: KeyCode) -> Option<String> {
    let name = match code {
        KeyCode::Char(' ') => " ",
        KeyCode::Char(c) => return Some(c.to_string()),
        KeyCode::Enter => "Enter",
        KeyCode::Esc => "Escape",
        KeyCode::Backspace => "Backspace",
        KeyCode::Tab | KeyCode::BackTab => "Tab",
        KeyCode::Delete => "Delete",
        KeyCode::Insert => "Insert",
        KeyCode::Home => "Home",
        KeyCode::End => "End",
        KeyCode::PageUp => "PageUp",
        KeyCode::PageDown => "PageDown",
        KeyCode::Up => "ArrowUp",
        KeyCode::Down => "ArrowDown",
        KeyCode::Left => "ArrowLeft",
        KeyCode::Right => "ArrowRight",
        KeyCode::F(n) => return Some(format!("F{n}")),
        KeyCode::CapsLock => "CapsLock",
        KeyCode::ScrollLock => "ScrollLock",
        KeyCode::NumLock => "NumLock",
        KeyCode::PrintScreen => "PrintScreen",
        KeyCode::Pause => "Pause",
        KeyCode::Menu => "ContextMenu",
        KeyCode::Media(MediaKeyCode::MuteVolume) => "AudioVolumeMute",
        KeyCode::Media(MediaKeyCode::LowerVolume) => "AudioVolumeDown",
        KeyCode::Media(MediaKeyCode::RaiseVolume) => "AudioVolumeUp",
        KeyCode::Modifier(modifier) => return modifier_key_name(modifier).map(String::from),
        _ => return None,
    };
    Some(name.to_string())
}

fn modifier_key_name(code: ModifierKeyCode) -> Option<&'static str> {
    match code {
        ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift => Some("Shift"),
        ModifierKeyCode::LeftControl | ModifierKeyCode::RightControl => Some("Control"),
        ModifierKeyCode::LeftAlt | ModifierKeyCode::RightAlt => Some("Alt"),
        ModifierKeyCode::LeftSuper
        | ModifierKeyCode::RightSuper
        | ModifierKeyCode::LeftMeta
        | ModifierKeyCode::RightMeta => Some("Meta"),
        _ => None,
    }
}

/// Convert a crossterm key event into a `RawKeyEvent`.
///
/// Returns `None` for keys that have no name (e.g. `Null`, most media keys).
pub fn to_raw_key(key: &KeyEvent) -> Option<RawKeyEvent> {
    let mut name = key_name(key.code)?;
    let mut shift = key.modifiers.contains(KeyModifiers::SHIFT);

    if let KeyCode::Char(c) = key.code
        && c.is_ascii_uppercase()
    {
        name = c.to_ascii_lowercase().to_string();
        shift = true;
    }
    if key.code == KeyCode::BackTab {
        shift = true;
    }

    Some(RawKeyEvent {
        key: name,
        ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
        alt: key.modifiers.contains(KeyModifiers::ALT),
        shift,
        meta: key
            .modifiers
            .intersects(KeyModifiers::SUPER | KeyModifiers::META),
    })
}

/// Returns true for Ctrl+K or Meta+K, which toggles the command palette.
pub fn is_palette_hotkey(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('k') | KeyCode::Char('K'))
        && key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER | KeyModifiers::META)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_plain_char() {
        let raw = to_raw_key(&event(KeyCode::Char('n'), KeyModifiers::NONE)).unwrap();
        assert_eq!(raw, RawKeyEvent::new("n"));
    }

    #[test]
    fn test_uppercase_char_sets_shift() {
        let raw = to_raw_key(&event(KeyCode::Char('R'), KeyModifiers::SHIFT)).unwrap();
        assert_eq!(raw, RawKeyEvent::new("r").shift());

        // Some terminals omit the SHIFT flag for uppercase letters
        let raw = to_raw_key(&event(KeyCode::Char('R'), KeyModifiers::NONE)).unwrap();
        assert_eq!(raw, RawKeyEvent::new("r").shift());
    }

    #[test]
    fn test_special_key_names() {
        let cases = [
            (KeyCode::Esc, "Escape"),
            (KeyCode::Up, "ArrowUp"),
            (KeyCode::Down, "ArrowDown"),
            (KeyCode::Left, "ArrowLeft"),
            (KeyCode::Right, "ArrowRight"),
            (KeyCode::Char(' '), " "),
            (KeyCode::Menu, "ContextMenu"),
            (KeyCode::F(5), "F5"),
            (KeyCode::Media(MediaKeyCode::MuteVolume), "AudioVolumeMute"),
        ];
        for (code, expected) in cases {
            assert_eq!(key_name(code).as_deref(), Some(expected), "{code:?}");
        }
    }

    #[test]
    fn test_modifier_key_names() {
        assert_eq!(
            key_name(KeyCode::Modifier(ModifierKeyCode::LeftControl)).as_deref(),
            Some("Control")
        );
        assert_eq!(
            key_name(KeyCode::Modifier(ModifierKeyCode::RightSuper)).as_deref(),
            Some("Meta")
        );
        assert_eq!(key_name(KeyCode::Modifier(ModifierKeyCode::IsoLevel3Shift)), None);
    }

    #[test]
    fn test_unnamed_keys() {
        assert_eq!(key_name(KeyCode::Null), None);
        assert_eq!(key_name(KeyCode::Media(MediaKeyCode::Play)), None);
        assert!(to_raw_key(&event(KeyCode::Null, KeyModifiers::CONTROL)).is_none());
    }

    #[test]
    fn test_modifier_flags() {
        let raw = to_raw_key(&event(
            KeyCode::Char('n'),
            KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER,
        ))
        .unwrap();
        assert!(raw.ctrl);
        assert!(raw.alt);
        assert!(raw.meta);
        assert!(!raw.shift);
    }

    #[test]
    fn test_backtab_is_shift_tab() {
        let raw = to_raw_key(&event(KeyCode::BackTab, KeyModifiers::SHIFT)).unwrap();
        assert_eq!(raw, RawKeyEvent::new("Tab").shift());
    }

    #[test]
    fn test_palette_hotkey() {
        assert!(is_palette_hotkey(&event(
            KeyCode::Char('k'),
            KeyModifiers::CONTROL
        )));
        assert!(is_palette_hotkey(&event(KeyCode::Char('k'), KeyModifiers::SUPER)));
        assert!(is_palette_hotkey(&event(
            KeyCode::Char('K'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT
        )));
        assert!(!is_palette_hotkey(&event(KeyCode::Char('k'), KeyModifiers::NONE)));
        assert!(!is_palette_hotkey(&event(KeyCode::Char('j'), KeyModifiers::CONTROL)));
    }
}
