//! Application state and rendering.
//!
//! The module is organized into submodules:
//! - `input`: Keyboard ownership (recorder → palette → hotkey → screen → shortcuts)
//! - `palette`: Command palette popup input
//! - `mouse`: Mouse and focus handling
//! - `actions`: Action handling (`App::update`)
//! - `render`: Rendering logic
//!
//! Invariants:
//! - The App is mutated only by the event loop task.
//! - Only `Recorder` methods change the recording state.

mod actions;
mod input;
mod mouse;
mod palette;
mod render;

use mailzero_client::{Connection, Session};
use mailzero_config::{BindingStorage, BindingStore};
use ratatui::layout::Rect;

use crate::palette::{
    NavSection, PaletteState, PaletteView, build_account_commands, build_groups, filter,
    navigation_config,
};
use crate::palette::registry::SHORTCUTS_ROUTE;
use crate::recorder::Recorder;
use crate::ui::shortcuts::ShortcutsLayout;
use crate::ui::{Theme, Toast};

/// Header height in rows.
pub const HEADER_HEIGHT: u16 = 3;
/// Footer height in rows.
pub const FOOTER_HEIGHT: u16 = 1;

/// Route of the compose placeholder.
pub const COMPOSE_ROUTE: &str = "/mail/compose";

/// Route shown at startup.
pub const DEFAULT_ROUTE: &str = SHORTCUTS_ROUTE;

/// Storage backend chosen at startup (file-backed or in-memory).
pub type DynStorage = Box<dyn BindingStorage + Send>;

/// Main application state.
pub struct App {
    pub store: BindingStore<DynStorage>,
    pub recorder: Recorder,
    pub palette: PaletteState,
    nav: Vec<NavSection>,

    /// Current route, e.g. `/settings/shortcuts`
    pub current_path: String,
    /// Number of route refreshes requested by side effects
    pub route_refreshes: u64,

    pub session: Option<Session>,
    pub connections: Vec<Connection>,
    /// True while an account switch task is running
    pub switch_in_flight: bool,

    // UI state
    pub toasts: Vec<Toast>,
    pub selected_shortcut: usize,
    pub shortcuts_layout: ShortcutsLayout,
    pub last_area: Rect,
    pub theme: Theme,
}

impl App {
    /// Create an app around an opened binding store.
    pub fn new(store: BindingStore<DynStorage>) -> Self {
        Self {
            store,
            recorder: Recorder::new(),
            palette: PaletteState::new(),
            nav: navigation_config(),
            current_path: DEFAULT_ROUTE.to_string(),
            route_refreshes: 0,
            session: None,
            connections: Vec::new(),
            switch_in_flight: false,
            toasts: Vec::new(),
            selected_shortcut: 0,
            shortcuts_layout: ShortcutsLayout::default(),
            last_area: Rect::default(),
            theme: Theme::default(),
        }
    }

    /// Open a binding store over `storage` and create an app around it.
    pub fn with_storage(storage: impl BindingStorage + Send + 'static) -> Self {
        Self::new(BindingStore::open(Box::new(storage) as DynStorage))
    }

    /// True when the shortcuts settings screen is showing.
    pub fn on_shortcuts_screen(&self) -> bool {
        self.current_path == SHORTCUTS_ROUTE
    }

    /// Current palette contents for the active search text.
    pub fn palette_view(&self) -> PaletteView {
        let groups = build_groups(&self.nav, &self.current_path, self.store.bindings());
        let accounts = build_account_commands(self.session.as_ref(), &self.connections);
        filter(&groups, &accounts, self.palette.search())
    }

    /// Action name of the highlighted shortcut row.
    pub fn selected_action(&self) -> Option<&str> {
        self.store
            .bindings()
            .as_slice()
            .get(self.selected_shortcut)
            .map(|b| b.action.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailzero_config::MemoryStorage;

    #[test]
    fn test_new_app_starts_on_shortcuts_screen() {
        let app = App::with_storage(MemoryStorage::new());
        assert!(app.on_shortcuts_screen());
        assert_eq!(app.selected_action(), Some("New Email"));
        assert!(!app.recorder.is_recording());
        assert!(!app.palette.is_open());
    }

    #[test]
    fn test_palette_view_has_no_accounts_without_session() {
        let mut app = App::with_storage(MemoryStorage::new());
        app.connections = vec![Connection {
            id: "conn-home".to_string(),
            email: "me@home.example.com".to_string(),
            name: None,
            picture: None,
        }];
        assert!(app.palette_view().accounts.is_empty());
    }
}
