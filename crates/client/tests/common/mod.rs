//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `tests/fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON

use std::path::PathBuf;

#[allow(unused_imports)]
pub use mailzero_client::endpoints;
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Load a JSON fixture from `tests/fixtures/`.
#[allow(dead_code)]
pub fn load_fixture(name: &str) -> serde_json::Value {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Invalid JSON in fixture {}: {}", path.display(), e))
}
