// Rust guideline compliant 2026-10-18

//! JSON formatting helpers and an async delay.
//!
//! These are stateless free functions. Failures inside them never reach the
//! caller: serialization errors fall back to the input's text form and parse
//! errors become `false`.

use serde::de::IgnoredAny;
use serde::Serialize;
use std::time::Duration;

/// Serializes `value` as JSON text indented with two spaces.
///
/// A `&str` is serialized as a JSON string, so text that already holds JSON
/// comes back quoted and escaped rather than reformatted:
/// `pretty_json("{\"a\":1}")` yields `"{\"a\":1}"` wrapped in quotes.
///
/// # Arguments
///
/// * `value` - Any serializable value that also has a text form
///
/// # Returns
///
/// The indented JSON text, or `value.to_string()` if serialization fails.
pub fn pretty_json<T>(value: &T) -> String
where
    T: Serialize + ToString + ?Sized,
{
    match serde_json::to_string_pretty(value) {
        Ok(text) => text,
        Err(err) => {
            tracing::trace!(error = %err, "pretty_json fell back to input text");
            value.to_string()
        }
    }
}

/// Reports whether `text` parses as a single JSON value.
///
/// Leading and trailing whitespace is accepted; anything else after the value
/// is not.
#[must_use]
pub fn is_valid_json(text: &str) -> bool {
    serde_json::from_str::<IgnoredAny>(text).is_ok()
}

/// Suspends the calling task for roughly `ms` milliseconds.
///
/// Only the awaiting task is delayed; the runtime keeps driving other tasks.
/// Must be awaited inside a tokio runtime with the timer enabled.
pub async fn sleep(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
