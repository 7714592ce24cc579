//! Terminal state management and cleanup.
//!
//! Responsibilities:
//! - Restore the terminal on exit, including during panics.
//!
//! Does NOT handle:
//! - Initial terminal setup (done in `main.rs`).
//!
//! Invariants / Assumptions:
//! - Created after terminal setup is complete and lives for the whole session.
//! - Drop implementation must not panic.

use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture},
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};

/// Guard that restores raw mode, the alternate screen and mouse capture on drop.
pub struct TerminalGuard {
    no_mouse: bool,
}

impl TerminalGuard {
    /// `no_mouse` records whether mouse capture was left disabled during setup.
    pub fn new(no_mouse: bool) -> Self {
        Self { no_mouse }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Errors are ignored: we may be unwinding.
        let _ = disable_raw_mode();
        let mut stdout = std::io::stdout();
        if self.no_mouse {
            let _ = execute!(stdout, LeaveAlternateScreen, DisableFocusChange);
        } else {
            let _ = execute!(
                stdout,
                LeaveAlternateScreen,
                DisableMouseCapture,
                DisableFocusChange
            );
        }
    }
}
