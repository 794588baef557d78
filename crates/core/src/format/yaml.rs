use serde::Deserialize;
use serde_yaml::Value;

use crate::error::{ToolError, ToolResult};

/// Parse every document in the stream. Anchors and aliases are resolved.
fn load_all(input: &str) -> ToolResult<Vec<Value>> {
    serde_yaml::Deserializer::from_str(input)
        .map(|document| Value::deserialize(document).map_err(|e| ToolError::parse("YAML", e)))
        .collect()
}

/// Re-dump YAML with two-space indentation and no line wrapping.
///
/// Multi-document streams are re-emitted with `---` separators.
pub fn beautify_yaml(input: &str) -> ToolResult<String> {
    if input.trim().is_empty() {
        return Ok(String::new());
    }

    let documents = load_all(input)?;
    let dumped = documents
        .iter()
        .map(|doc| serde_yaml::to_string(doc).map_err(|e| ToolError::parse("YAML", e)))
        .collect::<ToolResult<Vec<_>>>()?;

    Ok(dumped.join("---\n"))
}

/// Parse without transforming.
pub fn validate_yaml(input: &str) -> ToolResult<()> {
    load_all(input).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beautify_yaml_normalizes_indent() {
        let output = beautify_yaml("a:\n    b:    1\n    c: hello\n").unwrap();
        assert_eq!(output, "a:\n  b: 1\n  c: hello\n");
    }

    #[test]
    fn test_beautify_yaml_resolves_anchors() {
        let input = "base: &base\n  x: 1\ncopy: *base\n";
        let output = beautify_yaml(input).unwrap();
        assert!(!output.contains('&'));
        assert!(!output.contains('*'));
        assert_eq!(output, "base:\n  x: 1\ncopy:\n  x: 1\n");
    }

    #[test]
    fn test_beautify_yaml_keeps_long_lines() {
        let long = "word ".repeat(40);
        let output = beautify_yaml(&format!("text: {}\n", long.trim())).unwrap();
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_beautify_yaml_multiple_documents() {
        let output = beautify_yaml("a: 1\n---\nb: 2\n").unwrap();
        assert_eq!(output, "a: 1\n---\nb: 2\n");
    }

    #[test]
    fn test_invalid_yaml() {
        let err = beautify_yaml("a: [1, 2\n").unwrap_err();
        assert!(err.to_string().starts_with("Invalid YAML: "));
        assert!(validate_yaml("key: : value: [").is_err());
    }

    #[test]
    fn test_validate_yaml_ok() {
        assert!(validate_yaml("list:\n  - 1\n  - 2\n").is_ok());
        assert!(beautify_yaml("").unwrap().is_empty());
    }
}
