use crate::types::{BoardId, ColumnValues, ItemId};
use serde::{Deserialize, Serialize};

/// Variables of the `change_multiple_column_values` mutation.
///
/// `column_values` is typed `JSON!` by the API, which means it travels as a
/// JSON document encoded into a string, not as a nested object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeMultipleColumnValuesVariable {
    pub item_id: String,
    pub board_id: BoardId,
    pub column_values: String,
}

impl ChangeMultipleColumnValuesVariable {
    pub fn new(
        item_id: &ItemId,
        board_id: BoardId,
        column_values: &ColumnValues,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            item_id: item_id.to_string(),
            board_id,
            column_values: serde_json::to_string(column_values)?,
        })
    }
}

pub fn change_multiple_column_values_mutation() -> String {
    r#"
        mutation ($item_id: ID!, $board_id: ID!, $column_values: JSON!) {
          change_multiple_column_values (
            item_id: $item_id,
            board_id: $board_id,
            column_values: $column_values
          ) {
            id
          }
        }
    "#
    .to_string()
}
