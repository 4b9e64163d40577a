//! Service response model and selection projection.

use serde::Deserialize;
use serde_json::Value;

use crate::tags::FilterTag;

/// The fields this component consumes from the endpoint's response.
///
/// Everything else in the body is ignored, and the values themselves are
/// opaque — they are passed through to the display untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ServiceResponse {
    #[serde(rename = "Numbers")]
    pub numbers: Option<Value>,
    #[serde(rename = "Alphabets")]
    pub alphabets: Option<Value>,
    #[serde(rename = "HighestLowercaseAlphabet")]
    pub highest_lowercase: Option<Value>,
}

impl ServiceResponse {
    /// The response value backing a tag, if the endpoint sent one.
    pub fn field(&self, tag: FilterTag) -> Option<&Value> {
        match tag {
            FilterTag::Alphabets => self.alphabets.as_ref(),
            FilterTag::Numbers => self.numbers.as_ref(),
            FilterTag::HighestLowercase => self.highest_lowercase.as_ref(),
        }
    }
}

/// One `label: value` row of the result card.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayEntry {
    pub label: &'static str,
    pub value: Value,
}

impl DisplayEntry {
    /// Render the value for display: strings bare, anything else as JSON text.
    pub fn value_text(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// The post-filter, display-ready rows. Empty until a successful call.
pub type DisplayResult = Vec<DisplayEntry>;

/// Project a response through a filter selection.
///
/// Walks the tag table in display order, emitting exactly one entry per
/// selected tag. A tag whose field is absent maps to the literal placeholder
/// `"None"`; a JSON `null` counts as absent.
pub fn project(response: &ServiceResponse, selection: &[FilterTag]) -> DisplayResult {
    FilterTag::ALL
        .into_iter()
        .filter(|tag| selection.contains(tag))
        .map(|tag| DisplayEntry {
            label: tag.display_label(),
            value: response
                .field(tag)
                .filter(|value| !value.is_null())
                .cloned()
                .unwrap_or_else(|| Value::String("None".into())),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(body: Value) -> ServiceResponse {
        serde_json::from_value(body).expect("test response should deserialize")
    }

    #[test]
    fn one_entry_per_selected_tag_in_display_order() {
        let resp = response(json!({
            "Numbers": ["1", "2"],
            "Alphabets": ["a", "B"],
            "HighestLowercaseAlphabet": ["a"],
        }));
        // clicked in reverse display order
        let result = project(
            &resp,
            &[FilterTag::HighestLowercase, FilterTag::Numbers, FilterTag::Alphabets],
        );
        let labels: Vec<&str> = result.iter().map(|entry| entry.label).collect();
        assert_eq!(labels, vec!["Alphabets", "Numbers", "HighestLowercaseAlphabet"]);
    }

    #[test]
    fn absent_field_maps_to_none_placeholder() {
        let resp = response(json!({ "Numbers": ["1"] }));
        let result = project(&resp, &[FilterTag::Alphabets, FilterTag::Numbers]);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].label, "Alphabets");
        assert_eq!(result[0].value, json!("None"));
        assert_eq!(result[1].value, json!(["1"]));
    }

    #[test]
    fn null_field_counts_as_absent() {
        let resp = response(json!({ "Alphabets": null }));
        let result = project(&resp, &[FilterTag::Alphabets]);
        assert_eq!(result[0].value, json!("None"));
    }

    #[test]
    fn empty_selection_projects_to_nothing() {
        let resp = response(json!({ "Numbers": ["1"], "Alphabets": ["a"] }));
        assert!(project(&resp, &[]).is_empty());
    }

    #[test]
    fn unknown_response_fields_are_ignored() {
        let resp = response(json!({ "Numbers": ["7"], "is_success": true, "user_id": "x" }));
        let result = project(&resp, &[FilterTag::Numbers]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].value, json!(["7"]));
    }

    #[test]
    fn value_text_renders_strings_bare_and_the_rest_as_json() {
        let entry = DisplayEntry { label: "HighestLowercaseAlphabet", value: json!("b") };
        assert_eq!(entry.value_text(), "b");

        let entry = DisplayEntry { label: "Numbers", value: json!(["1", "2"]) };
        assert_eq!(entry.value_text(), r#"["1","2"]"#);

        let entry = DisplayEntry { label: "Numbers", value: json!("None") };
        assert_eq!(entry.value_text(), "None");
    }
}
