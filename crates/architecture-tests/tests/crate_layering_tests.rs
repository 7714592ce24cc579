//! Architecture tests for crate layering.
//!
//! - `mailzero-config` sits at the bottom and knows nothing about HTTP or terminals
//! - `mailzero-client` owns HTTP and never touches the terminal
//! - `mailzero-tui` talks to the API only through `mailzero-client`
//!
//! Checked statically from each crate's manifest and sources.

use std::fs;
use std::path::{Path, PathBuf};

fn crate_dir(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("architecture-tests lives under crates/")
        .join(name)
}

/// Dependency names a crate builds with, including target-specific ones.
/// Dev-dependencies are excluded.
fn runtime_dependencies(crate_name: &str) -> Vec<String> {
    let manifest = fs::read_to_string(crate_dir(crate_name).join("Cargo.toml"))
        .expect("Failed to read Cargo.toml");
    dependency_names(&manifest)
}

fn dependency_names(manifest: &str) -> Vec<String> {
    let manifest: toml::Table = toml::from_str(manifest).expect("Invalid Cargo.toml");

    let mut tables: Vec<&toml::Table> = Vec::new();
    if let Some(deps) = manifest.get("dependencies").and_then(toml::Value::as_table) {
        tables.push(deps);
    }
    if let Some(targets) = manifest.get("target").and_then(toml::Value::as_table) {
        tables.extend(
            targets
                .values()
                .filter_map(|target| target.get("dependencies"))
                .filter_map(toml::Value::as_table),
        );
    }

    tables
        .into_iter()
        .flat_map(|deps| {
            deps.iter().map(|(name, spec)| {
                // `alias = { package = "real-name", ... }`
                spec.get("package")
                    .and_then(toml::Value::as_str)
                    .unwrap_or(name.as_str())
                    .to_string()
            })
        })
        .collect()
}

fn sources_mentioning(crate_name: &str, needle: &str) -> Vec<String> {
    walkdir::WalkDir::new(crate_dir(crate_name).join("src"))
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .filter(|e| {
            fs::read_to_string(e.path())
                .map(|content| content.contains(needle))
                .unwrap_or(false)
        })
        .map(|e| e.path().display().to_string())
        .collect()
}

#[test]
fn test_manifest_parser_sees_dependencies() {
    let deps = runtime_dependencies("client");
    assert!(deps.iter().any(|d| d == "reqwest"), "got {deps:?}");
    assert!(deps.iter().any(|d| d == "mailzero-config"), "got {deps:?}");
    assert!(!deps.iter().any(|d| d == "wiremock"), "dev-dependencies leaked: {deps:?}");
}

#[test]
fn test_manifest_parser_handles_target_and_dotted_entries() {
    let deps = dependency_names(
        r#"
[package]
name = "sample"

[dependencies]
tokio.workspace = true
http = { package = "reqwest", version = "0.13" }

[target.'cfg(unix)'.dependencies.crossterm]
version = "0.29"

[dev-dependencies]
wiremock = "0.6"
"#,
    );
    assert_eq!(deps.len(), 3, "got {deps:?}");
    for expected in ["tokio", "reqwest", "crossterm"] {
        assert!(deps.iter().any(|d| d == expected), "missing {expected}: {deps:?}");
    }
}

#[test]
fn test_config_has_no_upward_dependencies() {
    let deps = runtime_dependencies("config");
    for forbidden in ["mailzero-client", "mailzero-tui", "reqwest", "ratatui", "crossterm"] {
        assert!(
            !deps.iter().any(|d| d == forbidden),
            "mailzero-config must not depend on {forbidden}"
        );
    }
}

#[test]
fn test_client_has_no_terminal_dependencies() {
    let deps = runtime_dependencies("client");
    for forbidden in ["mailzero-tui", "ratatui", "crossterm"] {
        assert!(
            !deps.iter().any(|d| d == forbidden),
            "mailzero-client must not depend on {forbidden}"
        );
    }
}

#[test]
fn test_tui_reaches_the_api_through_the_client() {
    assert!(
        !runtime_dependencies("tui").iter().any(|d| d == "reqwest"),
        "mailzero-tui must not depend on reqwest directly"
    );
    let offenders = sources_mentioning("tui", "reqwest::");
    assert!(
        offenders.is_empty(),
        "HTTP calls belong in mailzero-client:\n{}",
        offenders.join("\n")
    );
}
