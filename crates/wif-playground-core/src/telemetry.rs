// Rust guideline compliant 2026-10-18

//! Tracing setup for hosts embedding the playground state.

use crate::{Config, Error, Result};
use std::fs::OpenOptions;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

/// Installs a JSON tracing subscriber as the global default.
///
/// When `config.log_file` is set, lines are appended to that file through a
/// non-blocking writer and the returned guard must be kept alive to flush it.
/// Installing twice is not an error: the first subscriber stays in place, a
/// warning is logged through it, no log file is opened and `None` is returned.
///
/// # Errors
///
/// Returns an error if the log level is unknown or the log file cannot be opened.
pub fn init_tracing(config: &Config) -> Result<Option<WorkerGuard>> {
    let level = parse_log_level(&config.log_level)?;

    if tracing::dispatcher::has_been_set() {
        tracing::warn!(
            log_file = ?config.log_file,
            "tracing subscriber already installed; keeping it"
        );
        return Ok(None);
    }

    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .json()
            .with_writer(writer)
            .finish();
        if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
            tracing::warn!(error = %err, "log file will stay empty");
            return Ok(None);
        }
        return Ok(Some(guard));
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .json()
        .with_writer(std::io::stderr)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        tracing::warn!(error = %err, "tracing subscriber already installed");
    }
    Ok(None)
}

/// Parses a case-insensitive level name.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] for names other than error, warn, info,
/// debug and trace.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => Err(Error::InvalidConfig(format!("unknown log level: {other}"))),
    }
}
