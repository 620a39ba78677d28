// Rust guideline compliant 2026-10-18

//! WIF Playground Core Library
//!
//! This crate provides the client-side state used by the WIF mapping playground:
//! - Data models (Record, Slot, Encoding)
//! - Shared state store with slot observers and a watch channel
//! - JSON formatting helpers and an async delay
//! - Configuration loading and tracing setup
//! - Error types and result handling

pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod telemetry;
pub mod utils;

pub use config::Config;
pub use error::{Error, Result};
pub use models::{Encoding, Record, Slot, SlotChange};
pub use store::{LiveRecord, RecordWatch, SlotFilter, Store, SubscriptionId};
pub use utils::{is_valid_json, pretty_json, sleep};

/// Returns the version of this crate, as shown in the playground footer.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
