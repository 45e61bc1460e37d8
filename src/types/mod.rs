//! Core type definitions
//!
//! Strongly-typed wrappers for the values a caller hands to the Monday.com
//! client: endpoint configuration, item and board identifiers, and column
//! values.

pub mod column;
pub mod endpoint;
pub mod item;

pub use column::*;
pub use endpoint::*;
pub use item::*;

/// Variables attached to an arbitrary GraphQL request
pub type QueryVariables = serde_json::Map<String, serde_json::Value>;
