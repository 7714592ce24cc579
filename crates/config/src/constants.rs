//! Centralized constants for the Mail Zero TUI workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed HTTP request timeout in seconds (5 minutes).
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Default base URL of the Mail Zero web application.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Cookie carrying the session token on API requests.
pub const SESSION_COOKIE_NAME: &str = "better-auth.session_token";

// =============================================================================
// Environment Variables
// =============================================================================

/// Overrides the base URL of the Mail Zero server.
pub const ENV_BASE_URL: &str = "MAILZERO_BASE_URL";

/// Session cookie value sent with every request.
pub const ENV_SESSION_TOKEN: &str = "MAILZERO_SESSION_TOKEN";

/// Overrides the HTTP timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "MAILZERO_TIMEOUT_SECS";

/// Overrides the directory holding persisted shortcut state.
pub const ENV_CONFIG_DIR: &str = "MAILZERO_CONFIG_DIR";

// =============================================================================
// Persistence
// =============================================================================

/// Application name used for platform config directories.
pub const APP_NAME: &str = "mailzero-tui";

/// File holding the persisted shortcut bindings.
pub const SHORTCUTS_FILE: &str = "shortcuts.json";

/// File holding the "shortcuts customized" flag.
pub const SHORTCUTS_FLAG_FILE: &str = "shortcuts.customized";

// =============================================================================
// UI & Runtime
// =============================================================================

/// Capacity of the bounded action channel between tasks and the event loop.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// UI tick interval in milliseconds (toast expiry, redraw).
pub const DEFAULT_UI_TICK_MS: u64 = 250;

/// Default toast time-to-live in seconds.
pub const DEFAULT_TOAST_TTL_SECS: u64 = 5;

/// Project documentation URL offered by the command palette.
pub const DOCS_URL: &str = "https://github.com/nizzyabi/mail0";
