//! Common test utilities for TUI side effects tests.
//!
//! Uses wiremock to stand in for the Mail Zero API.
//!
//! # Invariants
//! - Fixtures are loaded from the client crate's `tests/fixtures` directory
//! - Each test gets its own isolated mock server and action channel
//!
//! # What this does NOT handle
//! - TUI rendering or terminal management

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Load a JSON fixture file from the client's fixtures directory.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let fixture_dir = manifest_dir
        .parent()
        .expect("No parent directory")
        .join("client")
        .join("tests")
        .join("fixtures");
    let full_path = fixture_dir.join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

// Re-export commonly used types for test convenience
pub use mailzero_client::MailClient;
pub use mailzero_tui::action::Action;
pub use mailzero_tui::runtime::side_effects::{SharedClient, TaskTracker, handle_side_effects};
pub use tokio::sync::mpsc::{Receiver, Sender};
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test harness for side effects testing.
///
/// Provides a mock HTTP server, action channel, and shared client
/// for testing async side effect handlers in isolation.
pub struct SideEffectsTestHarness {
    /// The mock HTTP server for intercepting API calls
    pub mock_server: MockServer,
    /// Receiver for actions sent by the side effect handlers
    pub action_rx: Receiver<Action>,
    /// Sender for actions (clone this to pass to handlers)
    pub action_tx: Sender<Action>,
    /// Shared client pointing to the mock server
    pub client: SharedClient,
    pub task_tracker: TaskTracker,
}

impl SideEffectsTestHarness {
    /// Create a new test harness with a mock server and fresh channels.
    pub async fn new() -> Self {
        let mock_server = MockServer::start().await;
        let (action_tx, action_rx) = mpsc::channel::<Action>(100);
        let client = create_test_client(&mock_server.uri());

        Self {
            mock_server,
            action_rx,
            action_tx,
            client,
            task_tracker: TaskTracker::new(),
        }
    }

    /// Handle an action and collect all resulting actions.
    ///
    /// This calls `handle_side_effects` directly under a short timeout (to detect
    /// blocking behavior), then collects all actions sent by spawned tasks.
    pub async fn handle_and_collect(&mut self, action: Action, timeout_secs: u64) -> Vec<Action> {
        let client = self.client.clone();
        let tx = self.action_tx.clone();

        let handle_future = handle_side_effects(action, client, tx, self.task_tracker.clone());
        match tokio::time::timeout(tokio::time::Duration::from_millis(100), handle_future).await {
            Ok(()) => {}
            Err(_) => {
                panic!(
                    "handle_side_effects timed out - it may be blocking on network I/O instead of spawning tasks"
                );
            }
        }

        tokio::task::yield_now().await;

        let mut actions = Vec::new();
        let deadline = tokio::time::Instant::now() + tokio::time::Duration::from_secs(timeout_secs);

        while tokio::time::Instant::now() < deadline {
            match tokio::time::timeout(
                tokio::time::Duration::from_millis(100),
                self.action_rx.recv(),
            )
            .await
            {
                Ok(Some(action)) => actions.push(action),
                Ok(None) => break,
                Err(_) => {
                    tokio::task::yield_now().await;
                }
            }
        }

        actions
    }
}

/// Create a client for the mock server (no session token).
pub fn create_test_client(base_url: &str) -> SharedClient {
    let client = MailClient::builder()
        .base_url(base_url.to_string())
        .build()
        .expect("Failed to build test client");
    Arc::new(client)
}
