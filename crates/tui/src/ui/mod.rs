//! UI rendering modules for the TUI.
//!
//! Screen and popup renderers are kept apart from the App state machine;
//! each takes the data it draws as arguments.

pub mod palette;
pub mod route;
pub mod shortcuts;
pub mod theme;
pub mod toast;

pub use theme::Theme;
pub use toast::{Toast, ToastLevel};

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Create a centered rectangle with the given percentage of the screen size.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
