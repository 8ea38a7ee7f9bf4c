//! Text derivation helpers shared by the report formatters.
//!
//! Default values arrive as raw JSON; reports need them as flat text. The
//! description helpers produce the two shapes the formatters print: the full
//! sentence-cased description for the appendix, and a one-sentence tag line
//! for the console report.

use icu_segmenter::SentenceSegmenter;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
/// Raised when a default value has a shape the reports cannot print.
pub enum TextError {
    #[error("unsupported default value kind '{kind}'; expected a scalar or a flat array")]
    InvalidValueKind { kind: &'static str },
}

/// Render a default value as flat text.
///
/// Flat arrays join their elements with `,` in order, no trailing separator;
/// scalars render in their natural form (strings unquoted). Objects and
/// nested arrays are the only rejected shapes.
pub fn default_value_to_string(value: &Value) -> Result<String, TextError> {
    match value {
        Value::Array(items) => {
            let parts = items
                .iter()
                .map(scalar_to_string)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(parts.join(","))
        }
        other => scalar_to_string(other),
    }
}

fn scalar_to_string(value: &Value) -> Result<String, TextError> {
    match value {
        Value::Null => Ok(String::new()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Number(number) => Ok(number.to_string()),
        Value::String(text) => Ok(text.clone()),
        Value::Array(_) => Err(TextError::InvalidValueKind {
            kind: "nested array",
        }),
        Value::Object(_) => Err(TextError::InvalidValueKind { kind: "object" }),
    }
}

/// Sentence-case a description: uppercase the first character and make sure
/// it ends with a period. Absent or empty descriptions become the empty
/// string; the body of the text is otherwise left untouched.
pub fn clean_description(description: Option<&str>) -> String {
    let Some(text) = description else {
        return String::new();
    };
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut cleaned: String = first.to_uppercase().chain(chars).collect();
    if !cleaned.ends_with('.') {
        cleaned.push('.');
    }
    cleaned
}

/// Extract the first sentence of a description, per UAX #29 sentence
/// boundaries (ICU root rules), trimmed of surrounding whitespace.
///
/// Descriptions without a period are returned unchanged; the segmenter only
/// runs when there is a boundary to find, which keeps abbreviation and
/// decimal handling consistent with the standard rules rather than a naive
/// split on `.`.
pub fn tag_line(description: &str) -> String {
    if !description.contains('.') {
        return description.to_string();
    }
    let segmenter = SentenceSegmenter::new();
    let mut boundaries = segmenter.segment_str(description);
    // The iterator always yields the start boundary (0) first.
    let start = boundaries.next().unwrap_or(0);
    let end = boundaries.next().unwrap_or(description.len());
    description[start..end].trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalar_defaults_render_naturally() {
        assert_eq!(default_value_to_string(&json!(42)).unwrap(), "42");
        assert_eq!(default_value_to_string(&json!(true)).unwrap(), "true");
        assert_eq!(default_value_to_string(&json!("8080")).unwrap(), "8080");
        assert_eq!(default_value_to_string(&json!(0.5)).unwrap(), "0.5");
    }

    #[test]
    fn array_defaults_join_with_commas() {
        assert_eq!(
            default_value_to_string(&json!([true, false])).unwrap(),
            "true,false"
        );
        assert_eq!(
            default_value_to_string(&json!(["a", "b", "c"])).unwrap(),
            "a,b,c"
        );
        assert_eq!(default_value_to_string(&json!([])).unwrap(), "");
    }

    #[test]
    fn composite_defaults_are_rejected() {
        assert_eq!(
            default_value_to_string(&json!({"nested": true})),
            Err(TextError::InvalidValueKind { kind: "object" })
        );
        assert_eq!(
            default_value_to_string(&json!([[1, 2]])),
            Err(TextError::InvalidValueKind {
                kind: "nested array"
            })
        );
    }

    #[test]
    fn clean_description_sentence_cases() {
        assert_eq!(clean_description(Some("enable the cache")), "Enable the cache.");
        assert_eq!(
            clean_description(Some("Already terminated.")),
            "Already terminated."
        );
        assert_eq!(clean_description(None), "");
        assert_eq!(clean_description(Some("")), "");
    }

    #[test]
    fn tag_line_takes_first_sentence() {
        assert_eq!(
            tag_line("Enable foo. See docs for bar."),
            "Enable foo."
        );
    }

    #[test]
    fn tag_line_without_period_is_unchanged() {
        assert_eq!(tag_line("Enable foo"), "Enable foo");
    }

    #[test]
    fn tag_line_keeps_decimal_numbers_whole() {
        assert_eq!(
            tag_line("Timeout of 1.5 seconds by default. Override per call."),
            "Timeout of 1.5 seconds by default."
        );
    }
}
