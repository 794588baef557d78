use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use crate::error::{ToolError, ToolResult};

/// Indentation used when pretty-printing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indent {
    #[default]
    Two,
    Four,
    Tab,
}

impl Indent {
    fn as_bytes(&self) -> &'static [u8] {
        match self {
            Indent::Two => b"  ",
            Indent::Four => b"    ",
            Indent::Tab => b"\t",
        }
    }
}

pub(crate) fn parse_json(input: &str) -> ToolResult<Value> {
    serde_json::from_str(input).map_err(|e| ToolError::parse("JSON", e))
}

pub(crate) fn to_pretty_string(value: &Value, indent: Indent) -> ToolResult<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| ToolError::parse("JSON", e))?;
    String::from_utf8(buf).map_err(|e| ToolError::parse("JSON", e))
}

/// Pretty-print JSON, keeping the original key order.
pub fn beautify_json(input: &str, indent: Indent) -> ToolResult<String> {
    let value = parse_json(input)?;
    to_pretty_string(&value, indent)
}

pub fn minify_json(input: &str) -> ToolResult<String> {
    let value = parse_json(input)?;
    serde_json::to_string(&value).map_err(|e| ToolError::parse("JSON", e))
}

pub fn validate_json(input: &str) -> ToolResult<()> {
    parse_json(input).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beautify_json_two_spaces() {
        let output = beautify_json(r#"{"b":1,"a":[true,null]}"#, Indent::Two).unwrap();
        assert_eq!(output, "{\n  \"b\": 1,\n  \"a\": [\n    true,\n    null\n  ]\n}");
    }

    #[test]
    fn test_beautify_json_tab() {
        let output = beautify_json(r#"{"a":1}"#, Indent::Tab).unwrap();
        assert_eq!(output, "{\n\t\"a\": 1\n}");
    }

    #[test]
    fn test_minify_json() {
        let output = minify_json("{\n  \"name\": \"x\",\n  \"list\": [1, 2]\n}").unwrap();
        assert_eq!(output, r#"{"name":"x","list":[1,2]}"#);
    }

    #[test]
    fn test_round_trip_preserves_value() {
        let input = r#"{"z":{"nested":[1,2.5,"three"]},"a":false}"#;
        let original: Value = serde_json::from_str(input).unwrap();

        let pretty = beautify_json(input, Indent::Four).unwrap();
        assert_eq!(serde_json::from_str::<Value>(&pretty).unwrap(), original);

        let minified = minify_json(&pretty).unwrap();
        assert_eq!(serde_json::from_str::<Value>(&minified).unwrap(), original);
    }

    #[test]
    fn test_invalid_json_reports_parser_message() {
        let err = beautify_json("{\"a\":}", Indent::Two).unwrap_err();
        assert!(matches!(err, ToolError::Parse(_)));
        assert!(err.to_string().starts_with("Invalid JSON: "));
        assert!(validate_json("[1,").is_err());
        assert!(validate_json("[1]").is_ok());
    }
}
