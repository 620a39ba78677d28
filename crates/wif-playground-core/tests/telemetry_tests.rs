// Rust guideline compliant 2026-10-18

//! Tracing setup writing JSON lines to a log file.
//!
//! Kept as the only test in this binary because it installs the global
//! subscriber.

use tempfile::TempDir;
use wif_playground_core::telemetry::init_tracing;
use wif_playground_core::{Config, Encoding, Store};

#[test]
fn test_store_writes_are_logged_to_file_once_installed() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_path = temp_dir.path().join("playground.log");
    let config = Config {
        log_level: "debug".to_string(),
        log_file: Some(log_path.clone()),
        ..Config::default()
    };

    let guard = init_tracing(&config).expect("Failed to init tracing");
    assert!(guard.is_some(), "file logging should return a flush guard");

    let store = Store::from_config(&config);
    store
        .update("mapping", "attribute.sub=assertion.sub", Encoding::Raw)
        .expect("Failed to update mapping");

    let second_path = temp_dir.path().join("second.log");
    let second = Config {
        log_file: Some(second_path.clone()),
        ..config.clone()
    };
    let second_guard = init_tracing(&second).expect("Second init should not fail");
    assert!(second_guard.is_none(), "no guard for an unused writer");
    assert!(!second_path.exists(), "unused log file should not be created");
    drop(guard);

    let content = std::fs::read_to_string(&log_path).expect("Failed to read log");
    let line = content
        .lines()
        .find(|line| line.contains("slot updated"))
        .expect("write should be logged");
    let event: serde_json::Value = serde_json::from_str(line).expect("log line is JSON");
    assert_eq!(event["level"], "DEBUG");
    assert_eq!(event["fields"]["slot"], "mapping");
    assert!(
        content.lines().any(|line| line.contains("already installed")),
        "second init should warn through the installed subscriber"
    );
}
