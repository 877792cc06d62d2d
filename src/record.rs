//! A single row returned by the statistics API.
//!
//! Records are kept as raw JSON objects. Only the dimension's key field is
//! interpreted by the cache; everything else (gender counts, totals, whatever
//! the API adds later) is carried through untouched for the views.

use crate::dimension::Dimension;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatRecord {
    fields: Map<String, Value>,
}

impl StatRecord {
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Canonical string form of the record's key for `dimension`.
    ///
    /// Strings are returned as-is and integers (years) are rendered in
    /// decimal. Any other JSON type counts as a missing key.
    pub fn key(&self, dimension: Dimension) -> Option<String> {
        match self.fields.get(dimension.key_field())? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn matches_key(&self, dimension: Dimension, key: &str) -> bool {
        self.key(dimension).is_some_and(|k| k == key)
    }

    /// Numeric count stored under `field`, e.g. `"male"` or `"female"`.
    pub fn count(&self, field: &str) -> Option<u64> {
        let value = self.fields.get(field)?;
        value
            .as_u64()
            .or_else(|| value.as_f64().filter(|f| *f >= 0.0).map(|f| f.round() as u64))
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}
