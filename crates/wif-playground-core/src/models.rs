// Rust guideline compliant 2026-10-18

//! Core data models for the playground state.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three named fields of the [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// Attribute mapping expression edited by the user.
    Mapping,
    /// Input token payload.
    Input,
    /// Result of running the mapping against the input.
    Output,
}

impl Slot {
    /// All slots in declaration order.
    pub const ALL: [Slot; 3] = [Slot::Mapping, Slot::Input, Slot::Output];

    /// Returns the stable lower-case name of the slot.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Mapping => "mapping",
            Slot::Input => "input",
            Slot::Output => "output",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Slot {
    type Err = Error;

    fn from_str(key: &str) -> Result<Self> {
        match key {
            "mapping" => Ok(Slot::Mapping),
            "input" => Ok(Slot::Input),
            "output" => Ok(Slot::Output),
            other => Err(Error::InvalidKey(other.to_string())),
        }
    }
}

/// How a value is turned into slot text on write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// Serialize the value as 2-space indented JSON before storing it.
    #[default]
    Json,
    /// Store the value's text form verbatim.
    Raw,
}

/// The flat three-slot record held by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Attribute mapping text.
    #[serde(default)]
    pub mapping: String,
    /// Input payload text.
    #[serde(default)]
    pub input: String,
    /// Output text.
    #[serde(default)]
    pub output: String,
}

impl Record {
    /// Returns the value of a slot.
    #[must_use]
    pub fn get(&self, slot: Slot) -> &str {
        match slot {
            Slot::Mapping => &self.mapping,
            Slot::Input => &self.input,
            Slot::Output => &self.output,
        }
    }

    /// Replaces the value of a slot, returning the previous one.
    pub fn set(&mut self, slot: Slot, value: String) -> String {
        let field = match slot {
            Slot::Mapping => &mut self.mapping,
            Slot::Input => &mut self.input,
            Slot::Output => &mut self.output,
        };
        std::mem::replace(field, value)
    }
}

/// A committed change to one slot, delivered to observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotChange {
    /// Slot that was written.
    pub slot: Slot,
    /// Value before the write.
    pub previous: String,
    /// Value after the write.
    pub current: String,
}
