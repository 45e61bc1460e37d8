//! Normalization of column values before they are sent to
//! `change_multiple_column_values`.
//!
//! UI-derived column values arrive wrapped as `{"text": ...}`. The write
//! mutation wants the bare text, so every envelope is unwrapped. An envelope
//! with empty text becomes `""`, which clears the column rather than
//! leaving it untouched.

use serde_json::{Map, Value};

use crate::types::TEXT_ENVELOPE_KEY;

#[derive(Debug)]
pub enum ColumnValuesError {
    /// The encoded column values could not be parsed back
    Decode(serde_json::Error),
    /// The encoded column values parsed, but not into an object
    NotAnObject(String),
    /// The normalized column values could not be encoded
    Encode(serde_json::Error),
}

impl std::fmt::Display for ColumnValuesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode(e) => write!(f, "Error parsing column values JSON: {}", e),
            Self::NotAnObject(found) => {
                write!(f, "Column values must be a JSON object, found {}", found)
            }
            Self::Encode(e) => write!(f, "Error encoding column values JSON: {}", e),
        }
    }
}

impl std::error::Error for ColumnValuesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(e) | Self::Encode(e) => Some(e),
            Self::NotAnObject(_) => None,
        }
    }
}

/// Unwraps every `{"text": ...}` envelope in a decoded column value mapping.
/// Entries of any other shape are returned unchanged.
pub fn normalize_column_values(column_values: Map<String, Value>) -> Map<String, Value> {
    column_values
        .into_iter()
        .map(|(column_id, value)| (column_id, unwrap_text_envelope(value)))
        .collect()
}

/// Decodes an encoded column value mapping, normalizes it and encodes it again.
pub fn normalize_serialized_column_values(encoded: &str) -> Result<String, ColumnValuesError> {
    let decoded: Value = serde_json::from_str(encoded).map_err(ColumnValuesError::Decode)?;
    let column_values = match decoded {
        Value::Object(column_values) => column_values,
        other => return Err(ColumnValuesError::NotAnObject(json_kind(&other).to_string())),
    };

    serde_json::to_string(&normalize_column_values(column_values))
        .map_err(ColumnValuesError::Encode)
}

fn unwrap_text_envelope(value: Value) -> Value {
    match value {
        Value::Object(mut envelope) => match envelope.remove(TEXT_ENVELOPE_KEY) {
            // Explicit clear: empty text is sent as "", never dropped
            Some(Value::String(text)) if text.is_empty() => Value::String(String::new()),
            Some(text) => text,
            None => Value::Object(envelope),
        },
        other => other,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_values_without_envelopes_are_untouched() {
        let column_values = as_map(json!({
            "owner": "alice",
            "status": {"label": "Done"},
            "date": {"date": "2024-01-31", "time": "10:00:00"},
            "numbers": 42,
            "tags": {"tag_ids": [1, 2]},
            "empty": {},
            "nothing": null
        }));

        assert_eq!(normalize_column_values(column_values.clone()), column_values);
    }

    #[test]
    fn test_empty_text_clears_column() {
        let normalized = normalize_column_values(as_map(json!({"notes": {"text": ""}})));
        assert_eq!(Value::Object(normalized), json!({"notes": ""}));
    }

    #[test]
    fn test_text_envelope_is_unwrapped() {
        let normalized = normalize_column_values(as_map(json!({"status": {"text": "hello"}})));
        assert_eq!(Value::Object(normalized), json!({"status": "hello"}));
    }

    #[test]
    fn test_envelope_with_extra_keys_is_still_unwrapped() {
        let normalized = normalize_column_values(as_map(json!({
            "status": {"text": "Working on it", "label": "ignored"}
        })));
        assert_eq!(Value::Object(normalized), json!({"status": "Working on it"}));
    }

    #[test]
    fn test_non_string_text_is_passed_through_raw() {
        let normalized = normalize_column_values(as_map(json!({
            "count": {"text": 7},
            "flag": {"text": null}
        })));
        assert_eq!(Value::Object(normalized), json!({"count": 7, "flag": null}));
    }

    #[test]
    fn test_normalize_serialized_round_trip() {
        let encoded = r#"{"status":{"text":"Done"},"notes":{"text":""},"owner":"bob"}"#;
        let normalized = normalize_serialized_column_values(encoded).unwrap();
        let decoded: Value = serde_json::from_str(&normalized).unwrap();
        assert_eq!(decoded, json!({"status": "Done", "notes": "", "owner": "bob"}));
    }

    #[test]
    fn test_normalize_serialized_rejects_invalid_input() {
        assert!(matches!(
            normalize_serialized_column_values("{not json"),
            Err(ColumnValuesError::Decode(_))
        ));
        assert!(matches!(
            normalize_serialized_column_values("[1, 2]"),
            Err(ColumnValuesError::NotAnObject(_))
        ));
    }
}
