//! Item and board identifiers
//!
//! Monday.com addresses items by an opaque `ID` string and boards by an
//! integer. Both are wrapped here so they cannot be swapped at call sites.

use serde::{Deserialize, Serialize};

/// Item identifier. Always sent to the API in its string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new<T: Into<String>>(item_id: T) -> Self {
        Self(item_id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

/// Board identifier. Serialized as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardId(pub i64);

impl BoardId {
    /// Create new board id
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the numeric value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for BoardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for BoardId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}
