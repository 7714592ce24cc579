//! Command palette popup state: visibility, search text and selection.

use crate::palette::filter::PaletteView;
use crate::palette::registry::CommandEntry;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteState {
    open: bool,
    search: String,
    selected: usize,
}

impl PaletteState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Index into the flattened visible entries.
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open = true;
            self.selected = 0;
        }
    }

    /// Close the palette and clear its search.
    pub fn close(&mut self) {
        self.open = false;
        self.search.clear();
        self.selected = 0;
    }

    pub fn push_char(&mut self, c: char) {
        self.search.push(c);
        self.selected = 0;
    }

    pub fn backspace(&mut self) {
        self.search.pop();
        self.selected = 0;
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
        self.selected = 0;
    }

    /// Move down, wrapping to the top.
    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    /// Move up, wrapping to the bottom.
    pub fn select_previous(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    /// Take the selected entry, closing the palette first.
    ///
    /// Returns `None` (and stays open) when nothing is selectable.
    pub fn select(&mut self, view: &PaletteView) -> Option<CommandEntry> {
        let entry = view.entry_at(self.selected)?.clone();
        self.close();
        Some(entry)
    }
}
