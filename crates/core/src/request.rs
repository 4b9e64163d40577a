//! Input parsing, schema validation, and the outbound request body.

use serde::Serialize;
use serde_json::Value;

use crate::error::SubmitError;
use crate::tags::FilterTag;

/// Schema failure message — the `data` array is the one thing the input must have.
pub(crate) const SCHEMA_MESSAGE: &str =
    "Invalid JSON format: data field is required and should be an array";

/// A validated submission: the `data` array pulled out of the user's JSON.
///
/// Elements are opaque — whatever the user typed (strings, numbers, nested
/// values) is forwarded untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRequest {
    pub data: Vec<Value>,
}

/// Wire body for the endpoint: `{ "data": [...], "filter": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitBody {
    pub data: Vec<Value>,
    pub filter: Vec<FilterTag>,
}

/// Parse raw input text into a [`ParsedRequest`].
///
/// Fails with [`SubmitError::Parse`] on malformed JSON and with
/// [`SubmitError::Schema`] when the parsed value is not an object with an
/// array-typed `data` field. Neither failure reaches the network.
pub fn parse_input(raw: &str) -> Result<ParsedRequest, SubmitError> {
    let value: Value = serde_json::from_str(raw)?;
    match value.get("data") {
        Some(Value::Array(items)) => Ok(ParsedRequest { data: items.clone() }),
        _ => Err(SubmitError::Schema(SCHEMA_MESSAGE.to_string())),
    }
}

impl ParsedRequest {
    /// Build the wire body. The filter array is emitted in display order
    /// regardless of the order the tags were clicked.
    pub fn into_body(self, selection: &[FilterTag]) -> SubmitBody {
        let filter = FilterTag::ALL.into_iter().filter(|tag| selection.contains(tag)).collect();
        SubmitBody { data: self.data, filter }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn malformed_text_is_a_parse_error() {
        let err = parse_input("not json").unwrap_err();
        assert!(matches!(err, SubmitError::Parse(_)), "expected Parse, got {err:?}");
    }

    #[test]
    fn object_without_data_is_a_schema_error() {
        let err = parse_input(r#"{"foo":1}"#).unwrap_err();
        assert!(matches!(err, SubmitError::Schema(_)), "expected Schema, got {err:?}");
    }

    #[test]
    fn non_array_data_is_a_schema_error() {
        let err = parse_input(r#"{"data":"abc"}"#).unwrap_err();
        assert!(matches!(err, SubmitError::Schema(_)), "expected Schema, got {err:?}");
    }

    #[test]
    fn non_object_root_is_a_schema_error() {
        // `.get("data")` on an array or scalar finds nothing
        let err = parse_input(r#"["1","a"]"#).unwrap_err();
        assert!(matches!(err, SubmitError::Schema(_)), "expected Schema, got {err:?}");
    }

    #[test]
    fn valid_input_keeps_data_verbatim() {
        let parsed = parse_input(r#"{"data":["1","a","B","2"]}"#).unwrap();
        assert_eq!(parsed.data, vec![json!("1"), json!("a"), json!("B"), json!("2")]);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let parsed = parse_input(r#"{"data":[1],"college_id":"ABC123"}"#).unwrap();
        assert_eq!(parsed.data, vec![json!(1)]);
    }

    #[test]
    fn body_filter_is_in_display_order() {
        let parsed = parse_input(r#"{"data":[]}"#).unwrap();
        // clicked Numbers first, then Alphabets
        let body = parsed.into_body(&[FilterTag::Numbers, FilterTag::Alphabets]);
        assert_eq!(body.filter, vec![FilterTag::Alphabets, FilterTag::Numbers]);
    }

    #[test]
    fn body_serializes_to_the_wire_shape() {
        let parsed = parse_input(r#"{"data":["1","a"]}"#).unwrap();
        let body = parsed.into_body(&[FilterTag::HighestLowercase]);
        let wire = serde_json::to_value(&body).unwrap();
        assert_eq!(
            wire,
            json!({ "data": ["1", "a"], "filter": ["Highest lowercase alphabet"] })
        );
    }
}
