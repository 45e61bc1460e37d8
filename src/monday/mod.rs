pub mod client;
pub mod error;
pub mod graphql;

pub use client::MondayClient;
pub use error::MondayApiError;
pub use graphql::graphql_types;
