use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Number, Value};

use super::json::{parse_json, to_pretty_string, Indent};
use crate::error::{ToolError, ToolResult};

const NOT_AN_ARRAY_OF_OBJECTS: &str = "Input must be a JSON array of objects.";

/// Largest integer a JavaScript number holds exactly (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

static FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*-?(\d+\.?|\.\d+|\d+\.\d+)([eE][-+]?\d+)?\s*$").expect("float pattern is valid")
});

/// Type a raw CSV cell: booleans, numbers, empty cells as null, else string.
fn typed_cell(raw: &str) -> Value {
    match raw {
        "true" | "TRUE" => return Value::Bool(true),
        "false" | "FALSE" => return Value::Bool(false),
        "" => return Value::Null,
        _ => {}
    }

    if FLOAT.is_match(raw) {
        if let Ok(f) = raw.trim().parse::<f64>() {
            if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER {
                return Value::Number(Number::from(f as i64));
            }
            if let Some(n) = Number::from_f64(f) {
                return Value::Number(n);
            }
        }
    }

    Value::String(raw.to_string())
}

/// Convert CSV with a header row into a pretty-printed JSON array of objects.
///
/// Blank lines are skipped. Fields past the header width are dropped and
/// missing trailing fields are omitted from the row object.
pub fn csv_to_json(input: &str) -> ToolResult<String> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| ToolError::parse("CSV", e))?
        .clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ToolError::parse("CSV", e))?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let row: Map<String, Value> = headers
            .iter()
            .zip(record.iter())
            .map(|(key, cell)| (key.to_string(), typed_cell(cell)))
            .collect();
        rows.push(Value::Object(row));
    }

    to_pretty_string(&Value::Array(rows), Indent::Two)
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Convert a JSON array of objects into comma-delimited CSV with a header row.
///
/// Columns come from the keys of the first object. Rows end with CRLF and
/// the output has no trailing line break.
pub fn json_to_csv(input: &str) -> ToolResult<String> {
    let value = parse_json(input)?;

    let items = match value {
        Value::Array(items) => items,
        _ => return Err(ToolError::validation(NOT_AN_ARRAY_OF_OBJECTS)),
    };

    let objects = items
        .iter()
        .map(|item| item.as_object())
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| ToolError::validation(NOT_AN_ARRAY_OF_OBJECTS))?;

    let Some(first) = objects.first() else {
        return Ok(String::new());
    };
    let columns: Vec<&String> = first.keys().collect();

    let mut writer = ::csv::WriterBuilder::new()
        .terminator(::csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer
        .write_record(&columns)
        .map_err(|e| ToolError::validation(e.to_string()))?;

    for object in &objects {
        let row: Vec<String> = columns
            .iter()
            .map(|column| cell_text(object.get(column.as_str())))
            .collect();
        writer
            .write_record(&row)
            .map_err(|e| ToolError::validation(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ToolError::validation(e.to_string()))?;
    let csv = String::from_utf8(bytes).map_err(|e| ToolError::validation(e.to_string()))?;

    Ok(csv.trim_end_matches("\r\n").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_to_json_types_numbers() {
        let output = csv_to_json("Name,Age\nAlice,30\nBob,25").unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{"Name": "Alice", "Age": 30}, {"Name": "Bob", "Age": 25}])
        );
        // Header order is kept.
        assert!(output.find("\"Name\"").unwrap() < output.find("\"Age\"").unwrap());
    }

    #[test]
    fn test_csv_to_json_types_booleans_floats_and_empty() {
        let output = csv_to_json("a,b,c,d\nTRUE,1.5,,hello\n").unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{"a": true, "b": 1.5, "c": null, "d": "hello"}])
        );
    }

    #[test]
    fn test_csv_to_json_skips_blank_lines() {
        let output = csv_to_json("x\n1\n\n2\n\n").unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value, serde_json::json!([{"x": 1}, {"x": 2}]));
    }

    #[test]
    fn test_csv_to_json_quoted_fields() {
        let output = csv_to_json("name,note\n\"Smith, J\",\"said \"\"hi\"\"\"").unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{"name": "Smith, J", "note": "said \"hi\""}])
        );
    }

    #[test]
    fn test_json_to_csv() {
        let output =
            json_to_csv(r#"[{"name":"Alice","age":30},{"name":"Bob, Jr","age":null}]"#).unwrap();
        assert_eq!(output, "name,age\r\nAlice,30\r\n\"Bob, Jr\",");
    }

    #[test]
    fn test_json_to_csv_nested_values_are_json() {
        let output = json_to_csv(r#"[{"tags":["a","b"]}]"#).unwrap();
        assert_eq!(output, "tags\r\n\"[\"\"a\"\",\"\"b\"\"]\"");
    }

    #[test]
    fn test_json_to_csv_rejects_object() {
        let err = json_to_csv(r#"{"a":1}"#).unwrap_err();
        assert_eq!(
            err,
            ToolError::Validation("Input must be a JSON array of objects.".to_string())
        );
    }

    #[test]
    fn test_json_to_csv_rejects_array_of_scalars() {
        let err = json_to_csv("[1,2]").unwrap_err();
        assert!(matches!(err, ToolError::Validation(_)));
    }

    #[test]
    fn test_json_to_csv_invalid_json() {
        let err = json_to_csv("[{").unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON: "));
    }

    #[test]
    fn test_json_to_csv_empty_array() {
        assert_eq!(json_to_csv("[]").unwrap(), "");
    }
}
