mod codec;
mod curl;
mod format;
mod text;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use textkit_core::ToolResult;

// Re-export types needed by tool handlers
pub use super::{JsonRpcError, Tool};

// MCP Protocol types for tools
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub tools: Option<ToolsCapability>,
}

#[derive(Debug, Serialize)]
pub struct ToolsCapability {}

#[derive(Debug, Serialize)]
pub struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

#[derive(Debug, Serialize)]
pub struct ToolsList {
    pub tools: Vec<Tool>,
}

#[derive(Debug, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct CallToolResult {
    pub content: Vec<Content>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum Content {
    #[serde(rename = "text")]
    Text { text: String },
}

fn internal_error(e: impl std::fmt::Display) -> JsonRpcError {
    JsonRpcError {
        code: -32603,
        message: format!("Internal error: {e}"),
        data: None,
    }
}

pub(super) fn invalid_arguments(e: impl std::fmt::Display) -> JsonRpcError {
    JsonRpcError {
        code: -32602,
        message: format!("Invalid arguments: {e}"),
        data: None,
    }
}

/// Deserialize the `arguments` object of a `tools/call` request.
pub(super) fn parse_args<T: DeserializeOwned>(
    arguments: Option<serde_json::Value>,
) -> Result<T, JsonRpcError> {
    serde_json::from_value(arguments.unwrap_or(serde_json::Value::Null)).map_err(invalid_arguments)
}

/// Serialize a structured tool output as pretty JSON text.
pub(super) fn json_text<T: Serialize>(value: &T) -> ToolResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| textkit_core::ToolError::validation(format!("Serialization error: {e}")))
}

/// Wrap a tool outcome in the MCP result shape. Tool failures are reported
/// in-band with `isError` so the client can show the message.
pub(super) fn tool_result(outcome: ToolResult<String>) -> Result<serde_json::Value, JsonRpcError> {
    let result = match outcome {
        Ok(text) => CallToolResult {
            content: vec![Content::Text { text }],
            is_error: None,
        },
        Err(e) => {
            log::debug!("tool failed with {}: {e}", e.kind());
            CallToolResult {
                content: vec![Content::Text {
                    text: e.to_string(),
                }],
                is_error: Some(true),
            }
        }
    };

    serde_json::to_value(result).map_err(internal_error)
}

pub fn handle_initialize() -> Result<serde_json::Value, JsonRpcError> {
    let result = InitializeResult {
        protocol_version: "2024-11-05".to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolsCapability {}),
        },
        server_info: ServerInfo {
            name: "textkit".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    serde_json::to_value(result).map_err(internal_error)
}

pub fn handle_tools_list() -> Result<serde_json::Value, JsonRpcError> {
    let tools = vec![
        Tool {
            name: "text_stats".to_string(),
            description: "Count words, characters (with and without spaces), grapheme clusters, sentences, paragraphs and lines, and estimate reading and speaking time in whole minutes.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "text": {
                        "type": "string",
                        "description": "Text to analyze"
                    },
                    "model": {
                        "type": "string",
                        "description": "Reading speed preset: 'standard' (225 wpm reading, 130 wpm speaking) or 'quick' (200 wpm, no speaking time). Default: 'standard'",
                        "enum": ["standard", "quick"]
                    }
                },
                "required": ["text"]
            }),
        },
        Tool {
            name: "keyword_density".to_string(),
            description: "List the eight most frequent keywords (stop words and words of two letters or fewer removed) with their count and percentage of all words.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "text": {
                        "type": "string",
                        "description": "Text to analyze"
                    }
                },
                "required": ["text"]
            }),
        },
        Tool {
            name: "case_convert".to_string(),
            description: "Convert text to upper, lower, title, sentence, camel, snake, kebab or alternating case.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "text": {
                        "type": "string",
                        "description": "Text to convert"
                    },
                    "case": {
                        "type": "string",
                        "description": "Target case",
                        "enum": ["upper", "lower", "title", "sentence", "camel", "snake", "kebab", "alternating"]
                    }
                },
                "required": ["text", "case"]
            }),
        },
        Tool {
            name: "text_transform".to_string(),
            description: "Reverse characters or words, check for palindromes, remove duplicate lines, slugify, sort lines, collapse extra spaces, or find and replace (literal or regular expression).".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "text": {
                        "type": "string",
                        "description": "Text to transform"
                    },
                    "operation": {
                        "type": "string",
                        "description": "Transformation to apply",
                        "enum": ["reverse", "reverse_words", "palindrome", "dedup_lines", "slugify", "sort_asc", "sort_desc", "remove_extra_spaces", "find_replace"]
                    },
                    "find": {
                        "type": "string",
                        "description": "Text or pattern to search for (find_replace only)"
                    },
                    "replace": {
                        "type": "string",
                        "description": "Replacement text (find_replace only, default: empty)"
                    },
                    "use_regex": {
                        "type": "boolean",
                        "description": "Treat 'find' as a regular expression (default: false)"
                    },
                    "case_insensitive": {
                        "type": "boolean",
                        "description": "Match case-insensitively (default: false)"
                    }
                },
                "required": ["text", "operation"]
            }),
        },
        Tool {
            name: "format_convert".to_string(),
            description: "Beautify, minify, validate or convert structured text: JSON, CSV to/from JSON, XML, YAML, SQL, and CSS/HTML/JavaScript minification.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "input": {
                        "type": "string",
                        "description": "Text to format"
                    },
                    "operation": {
                        "type": "string",
                        "description": "Formatting operation",
                        "enum": [
                            "beautify_json", "minify_json", "validate_json",
                            "csv_to_json", "json_to_csv",
                            "beautify_xml", "minify_xml",
                            "beautify_yaml", "validate_yaml",
                            "format_sql",
                            "minify_css", "minify_html", "minify_js"
                        ]
                    },
                    "indent": {
                        "type": "string",
                        "description": "Indentation for beautify_json (default: 'two')",
                        "enum": ["two", "four", "tab"]
                    }
                },
                "required": ["input", "operation"]
            }),
        },
        Tool {
            name: "encode".to_string(),
            description: "Encode text as Base64, URL-safe Base64, hex (UTF-16 code units), percent-encoding or HTML entities.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "input": {
                        "type": "string",
                        "description": "Text to encode"
                    },
                    "encoding": {
                        "type": "string",
                        "enum": ["base64", "base64url", "hex", "url", "html"]
                    },
                    "url_mode": {
                        "type": "string",
                        "description": "For 'url': encode a single 'component' or a whole 'uri' (default: 'component')",
                        "enum": ["component", "uri"]
                    }
                },
                "required": ["input", "encoding"]
            }),
        },
        Tool {
            name: "decode".to_string(),
            description: "Decode Base64, URL-safe Base64, hex, percent-encoded or HTML-entity text. Malformed input is reported as an error.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "input": {
                        "type": "string",
                        "description": "Text to decode"
                    },
                    "encoding": {
                        "type": "string",
                        "enum": ["base64", "base64url", "hex", "url", "html"]
                    }
                },
                "required": ["input", "encoding"]
            }),
        },
        Tool {
            name: "hash".to_string(),
            description: "Lowercase hex digest of the UTF-8 input. Supports MD5, SHA1, SHA224, SHA256, SHA384, SHA512 and RIPEMD160, or 'all' for every digest.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "input": {
                        "type": "string",
                        "description": "Text to hash"
                    },
                    "algorithm": {
                        "type": "string",
                        "description": "Digest algorithm, e.g. 'sha256', 'SHA-512', 'md5', or 'all' (default: 'sha256')"
                    }
                },
                "required": ["input"]
            }),
        },
        Tool {
            name: "hmac".to_string(),
            description: "Keyed HMAC of a message as lowercase hex. An empty message or key yields an empty result.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "message": {
                        "type": "string",
                        "description": "Message to authenticate"
                    },
                    "key": {
                        "type": "string",
                        "description": "Secret key"
                    },
                    "algorithm": {
                        "type": "string",
                        "description": "Digest algorithm (default: 'sha256')"
                    }
                },
                "required": ["message", "key"]
            }),
        },
        Tool {
            name: "curl_to_fetch".to_string(),
            description: "Translate a cURL command into an equivalent JavaScript fetch() call with method, headers and body.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "command": {
                        "type": "string",
                        "description": "The cURL command, line continuations allowed"
                    }
                },
                "required": ["command"]
            }),
        },
    ];

    let result = ToolsList { tools };

    serde_json::to_value(result).map_err(internal_error)
}

pub fn handle_tools_call(
    params: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: CallToolParams = serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
        .map_err(|e| JsonRpcError {
            code: -32602,
            message: format!("Invalid params: {e}"),
            data: None,
        })?;

    log::debug!("tools/call {}", params.name);

    match params.name.as_str() {
        "text_stats" => text::handle_text_stats(params.arguments, global),
        "keyword_density" => text::handle_keyword_density(params.arguments, global),
        "case_convert" => text::handle_case_convert(params.arguments, global),
        "text_transform" => text::handle_text_transform(params.arguments, global),
        "format_convert" => format::handle_format_convert(params.arguments, global),
        "encode" => codec::handle_encode(params.arguments, global),
        "decode" => codec::handle_decode(params.arguments, global),
        "hash" => codec::handle_hash(params.arguments, global),
        "hmac" => codec::handle_hmac(params.arguments, global),
        "curl_to_fetch" => curl::handle_curl_to_fetch(params.arguments, global),
        _ => Err(JsonRpcError {
            code: -32602,
            message: format!("Unknown tool: {}", params.name),
            data: None,
        }),
    }
}
