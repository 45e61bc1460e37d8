/// Monday.com GraphQL client: raw query execution and item column updates
pub mod monday;

/// Core type definitions used by the client
pub mod types;
