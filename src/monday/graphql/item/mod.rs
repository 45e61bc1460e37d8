pub mod column_values;
pub mod query;

pub use column_values::*;
pub use query::*;
