//! Flight record
//!
//! The opaque domain object handed to the processor by the upstream consumer.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A flight message as received from upstream.
///
/// Only `id` is required. Every other attribute is carried through untouched
/// and only used to render the record for logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    /// Flight identifier, e.g. `AB123`
    pub id: String,
    /// Remaining attributes, ordered by name
    #[serde(flatten)]
    pub attributes: BTreeMap<String, Value>,
}

impl Flight {
    /// Creates a flight with no extra attributes.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Adds an attribute, builder style.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Validates the record before it is processed.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.id.trim().is_empty() {
            return Some("Flight id cannot be empty".to_string());
        }
        None
    }
}

/// Renders as `{id: AB123, origin: LHR}`.
impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{id: {}", self.id)?;
        for (name, value) in &self.attributes {
            match value {
                Value::String(s) => write!(f, ", {}: {}", name, s)?,
                other => write!(f, ", {}: {}", name, other)?,
            }
        }
        write!(f, "}}")
    }
}
