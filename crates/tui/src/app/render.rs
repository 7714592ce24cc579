//! Rendering logic for the TUI app.
//!
//! Responsibilities:
//! - Render the main app layout (header, content, footer)
//! - Dispatch to the shortcuts screen or the route placeholder
//! - Draw the palette popup and toasts on top
//!
//! Non-responsibilities:
//! - Does NOT handle input
//! - Does NOT mutate app state (except for the recorded layout and area)

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::ui::palette::render_palette;
use crate::ui::route::{render_route_placeholder, route_title};
use crate::ui::shortcuts::{ShortcutsRenderConfig, render_shortcuts};
use crate::ui::toast::render_toasts;

impl App {
    /// Render the application UI.
    pub fn render(&mut self, f: &mut Frame) {
        self.last_area = f.area();
        let theme = self.theme;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(f.area());

        let account = self
            .session
            .as_ref()
            .map(|s| s.user.email.clone())
            .unwrap_or_else(|| "Not signed in".to_string());

        let header = Paragraph::new(Line::from(vec![
            Span::styled("Mail Zero", theme.title()),
            Span::raw(" - "),
            Span::styled(route_title(&self.current_path), theme.text()),
            Span::styled(format!("  [{account}]"), theme.text_dim()),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border()),
        );
        f.render_widget(header, chunks[0]);

        if self.on_shortcuts_screen() {
            let layout = render_shortcuts(
                f,
                chunks[1],
                ShortcutsRenderConfig {
                    bindings: self.store.bindings(),
                    selected: self.selected_shortcut,
                    offset: self.shortcuts_layout.offset,
                    editing: self.recorder.editing_action(),
                    tentative: self.recorder.tentative(),
                    customized: self.store.is_customized(),
                    theme: &theme,
                },
            );
            self.shortcuts_layout = layout;
        } else {
            render_route_placeholder(f, chunks[1], &self.current_path, &theme);
        }

        let footer_text = if self.switch_in_flight {
            " Switching account...  |  Ctrl+K: commands  |  q: quit"
        } else {
            " Ctrl+K: commands  |  q: quit"
        };
        f.render_widget(
            Paragraph::new(Span::styled(footer_text, theme.text_dim())),
            chunks[2],
        );

        if self.palette.is_open() {
            let view = self.palette_view();
            render_palette(f, &view, self.palette.search(), self.palette.selected(), &theme);
        }

        render_toasts(f, &self.toasts, &theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailzero_config::MemoryStorage;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &mut App) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_shortcuts_screen_and_records_layout() {
        let mut app = App::with_storage(MemoryStorage::new());
        let content = draw(&mut app);

        assert!(content.contains("Mail Zero"));
        assert!(content.contains("Not signed in"));
        assert!(content.contains("Keyboard Shortcuts"));
        assert!(app.shortcuts_layout.rows.height > 0);
        assert_eq!(app.last_area.width, 100);
    }

    #[test]
    fn test_renders_placeholder_and_palette() {
        let mut app = App::with_storage(MemoryStorage::new());
        app.current_path = "/mail/inbox".to_string();
        app.palette.toggle();
        let content = draw(&mut app);

        assert!(!content.contains("Keyboard Shortcuts"));
        assert!(content.contains("Command Palette"));
    }
}
