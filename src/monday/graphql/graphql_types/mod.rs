pub mod item;

use serde::{Deserialize, Serialize};

pub use item::*;

#[derive(Debug, Clone, Serialize)]
pub struct GraphQLQuery(pub String);

#[derive(Debug, Clone, Serialize)]
pub struct GraphQLPayload<T: serde::Serialize> {
    pub query: GraphQLQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<T>,
}

impl<T: serde::Serialize> GraphQLPayload<T> {
    pub fn new(query: GraphQLQuery, variables: Option<T>) -> Self {
        Self { query, variables }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQLError {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub locations: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub path: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub extensions: Option<serde_json::Value>,
}
