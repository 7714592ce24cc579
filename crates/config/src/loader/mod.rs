//! Configuration loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Load client settings from `.env` files, environment variables and explicit overrides.
//! - Provide a builder-pattern `ConfigLoader` for layered configuration.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Persisting shortcut state (see `persistence`).
//!
//! Invariants / Assumptions:
//! - Builder overrides take precedence over environment variables, which take
//!   precedence over defaults.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;


pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;
