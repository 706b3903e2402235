//! Walk data models.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A single walk as published by the registry.
///
/// Only `silliness` is read. Every other field, `name` included, is kept
/// exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalkRecord {
    /// Silliness rating, any JSON number
    pub silliness: Number,
    /// All other fields, kept as received
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WalkRecord {
    /// Create a walk with just a name and a rating.
    pub fn new(name: &str, silliness: i64) -> Self {
        let mut extra = Map::new();
        extra.insert("name".to_string(), Value::from(name));
        Self {
            silliness: Number::from(silliness),
            extra,
        }
    }

    /// The walk's name, if it is a string.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.extra.get("name").and_then(Value::as_str)
    }

    /// Strictly greater than `threshold`.
    #[must_use]
    pub fn is_sillier_than(&self, threshold: i64) -> bool {
        compare_number(&self.silliness, threshold) == Some(Ordering::Greater)
    }
}

/// Compare a JSON number against an integer without losing integer precision.
fn compare_number(number: &Number, threshold: i64) -> Option<Ordering> {
    if let Some(i) = number.as_i64() {
        return Some(i.cmp(&threshold));
    }
    if number.as_u64().is_some() {
        // Anything that fits u64 but not i64 is above every i64.
        return Some(Ordering::Greater);
    }
    #[allow(clippy::cast_precision_loss)]
    number.as_f64()?.partial_cmp(&(threshold as f64))
}

impl fmt::Display for WalkRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
