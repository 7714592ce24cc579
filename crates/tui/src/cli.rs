//! Command-line argument parsing for mailzero-tui.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Provide parsed CLI arguments to the main application.
//!
//! Does NOT handle:
//! - Configuration loading or validation (see `mailzero_config::ConfigLoader`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.
//! - All path arguments are resolved relative to the current working directory.

use clap::Parser;
use std::path::PathBuf;

use mailzero_config::constants::{ENV_BASE_URL, ENV_CONFIG_DIR};

/// Command-line arguments for mailzero-tui.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --base-url, --config-dir)
/// 2. Environment variables (e.g., MAILZERO_BASE_URL, MAILZERO_SESSION_TOKEN)
/// 3. Default values
#[derive(Debug, Parser)]
#[command(
    name = "mailzero-tui",
    about = "Keyboard shortcuts and command palette for Mail Zero",
    version,
    after_help = "Examples:\n  mailzero-tui\n  mailzero-tui --base-url https://mail.example.com\n  mailzero-tui --config-dir ~/.config/mailzero-tui --no-mouse\n  mailzero-tui --fresh\n"
)]
pub struct Cli {
    /// Mail Zero server URL
    #[arg(long, env = ENV_BASE_URL)]
    pub base_url: Option<String>,

    /// Directory holding the persisted shortcut bindings
    #[arg(long, env = ENV_CONFIG_DIR)]
    pub config_dir: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,

    /// Start with default shortcuts kept in memory, ignoring persisted bindings
    #[arg(long)]
    pub fresh: bool,
}
