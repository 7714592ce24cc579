//! Shortcuts settings screen rendering.
//!
//! Responsibilities:
//! - Render every action with its current chord, in default-table order.
//! - Show the tentative chord of the row being recorded.
//! - Report the drawn row area so mouse clicks can be mapped to rows.
//!
//! Does NOT handle:
//! - Processing key input (handled in `app::input`).
//! - Persisting bindings (handled by the `BindingStore`).
//!
//! Invariants:
//! - Displayed key hints match the keys handled by `App::handle_screen_key`.

use mailzero_config::BindingSet;
use mailzero_config::keybind::{KeyToken, format_keys};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::ui::theme::Theme;

/// Render configuration for the shortcuts screen.
pub struct ShortcutsRenderConfig<'a> {
    pub bindings: &'a BindingSet,
    /// Highlighted row
    pub selected: usize,
    /// First visible row from the previous frame
    pub offset: usize,
    /// Action being recorded, if any
    pub editing: Option<&'a str>,
    /// Chord captured so far for `editing`
    pub tentative: &'a [KeyToken],
    pub customized: bool,
    pub theme: &'a Theme,
}

/// Where the rows ended up, for mouse hit-testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShortcutsLayout {
    /// Area covered by data rows (excludes borders and header)
    pub rows: Rect,
    /// First visible row after scrolling
    pub offset: usize,
}

impl ShortcutsLayout {
    /// Row index under a screen position, if any.
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let r = self.rows;
        if column < r.x || column >= r.x + r.width || row < r.y || row >= r.y + r.height {
            return None;
        }
        Some(self.offset + (row - r.y) as usize)
    }
}

fn hint_line(editing: bool, theme: &Theme) -> Line<'static> {
    let hints = if editing {
        "Press the new keys  Enter: save  Backspace: erase  Esc: cancel"
    } else {
        "↑/↓: select  Enter: record  r: reset to defaults  Ctrl+K: commands  q: quit"
    };
    Line::from(Span::styled(hints, theme.text_dim()))
}

/// Render the shortcuts screen.
pub fn render_shortcuts(f: &mut Frame, area: Rect, config: ShortcutsRenderConfig) -> ShortcutsLayout {
    let theme = config.theme;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    let status = if config.customized {
        "Customized"
    } else {
        "Defaults"
    };
    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Keyboard Shortcuts", theme.title()),
            Span::styled(format!("  ({status})"), theme.text_dim()),
        ]),
        Line::from(Span::styled(
            "Select an action and press Enter to record a new chord.",
            theme.text_dim(),
        )),
    ]);
    f.render_widget(header, chunks[0]);

    let rows: Vec<Row> = config
        .bindings
        .iter()
        .map(|binding| {
            if config.editing == Some(binding.action.as_str()) {
                let keys = if config.tentative.is_empty() {
                    "Press keys...".to_string()
                } else {
                    format_keys(config.tentative)
                };
                Row::new(vec![
                    Cell::from(binding.action.clone()),
                    Cell::from(keys).style(theme.recording()),
                ])
            } else {
                Row::new(vec![
                    Cell::from(binding.action.clone()).style(theme.text()),
                    Cell::from(binding.display()).style(theme.text()),
                ])
            }
        })
        .collect();

    let border_style = if config.editing.is_some() {
        theme.border_focused()
    } else {
        theme.border()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(chunks[1]);

    let table = Table::new(rows, [Constraint::Percentage(60), Constraint::Percentage(40)])
        .header(Row::new(vec!["Action", "Keys"]).style(theme.title()))
        .block(block)
        .row_highlight_style(theme.highlight())
        .highlight_symbol("> ");

    let mut state = TableState::default()
        .with_offset(config.offset)
        .with_selected(Some(config.selected));
    f.render_stateful_widget(table, chunks[1], &mut state);

    f.render_widget(Paragraph::new(hint_line(config.editing.is_some(), theme)), chunks[2]);

    ShortcutsLayout {
        rows: Rect {
            x: inner.x,
            y: inner.y.saturating_add(1),
            width: inner.width,
            height: inner.height.saturating_sub(1),
        },
        offset: state.offset(),
    }
}
