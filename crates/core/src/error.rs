use serde::{Deserialize, Serialize};

/// Failure of a single tool invocation.
///
/// Every variant carries the complete user-facing message, tool label
/// included (e.g. `"Invalid JSON: expected value at line 1 column 1"`), so
/// `Display` can surface it verbatim.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum ToolError {
    /// Input failed to parse against its expected grammar.
    #[error("{0}")]
    Parse(String),

    /// Input parsed but violated a structural precondition.
    #[error("{0}")]
    Validation(String),

    /// Malformed encoded input handed to a decoder.
    #[error("{0}")]
    InvalidEncoding(String),

    /// A user supplied pattern failed to compile.
    #[error("{0}")]
    Regex(String),
}

impl ToolError {
    /// Builds a parse error with a tool label, e.g. `ToolError::parse("JSON", e)`.
    pub fn parse(label: &str, cause: impl std::fmt::Display) -> Self {
        Self::Parse(format!("Invalid {label}: {cause}"))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn encoding(label: &str, cause: impl std::fmt::Display) -> Self {
        Self::InvalidEncoding(format!("Invalid {label}: {cause}"))
    }

    /// Stable label used by callers that report the error category.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Parse(_) => "parse_error",
            Self::Validation(_) => "validation_error",
            Self::InvalidEncoding(_) => "invalid_encoding",
            Self::Regex(_) => "regex_error",
        }
    }
}

pub type ToolResult<T> = Result<T, ToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_verbatim() {
        let err = ToolError::parse("JSON", "expected value");
        assert_eq!(err.to_string(), "Invalid JSON: expected value");
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(ToolError::validation("x").kind(), "validation_error");
        assert_eq!(ToolError::encoding("hex", "x").kind(), "invalid_encoding");
        assert_eq!(ToolError::Regex("x".into()).kind(), "regex_error");
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let err = ToolError::validation("Input must be a JSON array of objects.");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "validation");
        assert_eq!(json["message"], "Input must be a JSON array of objects.");
    }
}
