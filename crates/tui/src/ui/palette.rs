//! Command palette popup rendering.
//!
//! Does NOT handle input (see `app::palette`) or filtering (see
//! `palette::filter`); it draws a prepared `PaletteView`.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::palette::PaletteView;
use crate::ui::centered_rect;
use crate::ui::theme::Theme;

pub const PALETTE_WIDTH_PERCENT: u16 = 60;
pub const PALETTE_HEIGHT_PERCENT: u16 = 70;

/// Build the list lines and the line index of the selected entry.
fn list_lines<'a>(
    view: &'a PaletteView,
    selected: usize,
    width: usize,
    theme: &Theme,
) -> (Vec<Line<'a>>, usize) {
    let mut lines = Vec::new();
    let mut selected_line = 0;
    let mut index = 0;

    for (name, entries) in view.sections() {
        if !name.is_empty() {
            if !lines.is_empty() {
                lines.push(Line::raw(""));
            }
            lines.push(Line::from(Span::styled(name, theme.text_dim())));
        }
        for entry in entries {
            let label = format!(" {} {}", entry.icon.unwrap_or(" "), entry.title);
            let hint = entry.shortcut_hint.clone().unwrap_or_default();
            let pad = width.saturating_sub(label.chars().count() + hint.chars().count() + 1);
            let text = format!("{label}{}{hint} ", " ".repeat(pad));

            let style = if index == selected {
                selected_line = lines.len();
                theme.highlight()
            } else {
                theme.text()
            };
            lines.push(Line::from(Span::styled(text, style)));
            index += 1;
        }
    }
    (lines, selected_line)
}

/// Render the palette popup over the current screen.
pub fn render_palette(f: &mut Frame, view: &PaletteView, search: &str, selected: usize, theme: &Theme) {
    let area = centered_rect(PALETTE_WIDTH_PERCENT, PALETTE_HEIGHT_PERCENT, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" Command Palette ")
        .borders(Borders::ALL)
        .border_style(theme.border_focused());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let prompt = if search.is_empty() {
        Span::styled("Type a command or search...", theme.text_dim())
    } else {
        Span::styled(search, theme.text())
    };
    let input = Paragraph::new(vec![
        Line::from(vec![Span::styled("> ", theme.title()), prompt]),
        Line::from(Span::styled(
            "─".repeat(inner.width as usize),
            theme.border(),
        )),
    ]);
    f.render_widget(input, chunks[0]);

    if view.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled("No results found.", theme.text_dim())),
            chunks[1],
        );
    } else {
        let (lines, selected_line) = list_lines(view, selected, chunks[1].width as usize, theme);
        let visible = chunks[1].height as usize;
        let scroll = (selected_line + 1).saturating_sub(visible);
        f.render_widget(Paragraph::new(lines).scroll((scroll as u16, 0)), chunks[1]);
    }

    f.render_widget(
        Paragraph::new(Span::styled(
            "↑/↓ or Tab: navigate  Enter: run  Ctrl+U: clear  Esc: close",
            theme.text_dim(),
        )),
        chunks[2],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{build_groups, filter, navigation_config};
    use mailzero_config::BindingSet;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(search: &str, selected: usize) -> String {
        let groups = build_groups(&navigation_config(), "/mail/inbox", &BindingSet::defaults());
        let view = filter(&groups, &[], search);
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render_palette(f, &view, search, selected, &Theme::default()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_groups_and_hints() {
        let content = draw("", 0);
        assert!(content.contains("Command Palette"));
        assert!(content.contains("Type a command or search..."));
        assert!(content.contains("Compose message"));
        assert!(content.contains("⌘+n"));
        assert!(content.contains("Mail"));
        assert!(content.contains("Inbox"));
    }

    #[test]
    fn test_renders_empty_state() {
        let content = draw("no such command", 0);
        assert!(content.contains("No results found."));
    }

    #[test]
    fn test_scrolls_to_keep_selection_visible() {
        let groups = build_groups(&navigation_config(), "/mail/inbox", &BindingSet::defaults());
        let view = filter(&groups, &[], "");
        let last = view.len() - 1;

        let content = draw("", last);
        assert!(content.contains("Go to docs"));
    }
}
