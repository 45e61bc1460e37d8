use serde_json::Value;

/// Location of the updated item's id in a `change_multiple_column_values` response
pub const CHANGED_ITEM_ID_POINTER: &str = "/data/change_multiple_column_values/id";

/// The updated item's id, if the response carries a non-empty one.
///
/// Only the id path is inspected; `errors` or other fields never affect the
/// outcome.
pub fn changed_item_id(response: &Value) -> Option<&Value> {
    response
        .pointer(CHANGED_ITEM_ID_POINTER)
        .filter(|id| is_present_identifier(id))
}

/// Whether an `ID` value actually identifies something.
/// Null, empty strings, zero, `false` and empty containers do not.
pub fn is_present_identifier(id: &Value) -> bool {
    match id {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(values) => !values.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}
