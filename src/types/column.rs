//! Column identifiers and column values
//!
//! A column value is kept as raw JSON. The two shapes the updater cares about
//! are a bare string and a `{"text": ...}` envelope; anything else is sent to
//! the API untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key of the display-text envelope used by UI-derived column values
pub const TEXT_ENVELOPE_KEY: &str = "text";

/// Column identifier wrapper for type safety
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct ColumnId(pub String);

impl ColumnId {
    pub fn new<T: Into<String>>(column_id: T) -> Self {
        Self(column_id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ColumnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ColumnId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ColumnId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnValue(pub Value);

impl ColumnValue {
    /// A bare string assigned to the column as-is
    pub fn scalar<T: Into<String>>(text: T) -> Self {
        Self(Value::String(text.into()))
    }

    /// A `{"text": ...}` envelope. An empty text clears the column.
    pub fn text_envelope<T: Into<String>>(text: T) -> Self {
        let mut envelope = serde_json::Map::new();
        envelope.insert(TEXT_ENVELOPE_KEY.to_string(), Value::String(text.into()));
        Self(Value::Object(envelope))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for ColumnValue {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<&str> for ColumnValue {
    fn from(s: &str) -> Self {
        Self::scalar(s)
    }
}

impl From<String> for ColumnValue {
    fn from(s: String) -> Self {
        Self::scalar(s)
    }
}

/// Column id to value mapping sent with a single item update
pub type ColumnValues = BTreeMap<ColumnId, ColumnValue>;
