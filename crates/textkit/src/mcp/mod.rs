mod cli;
mod sse;
mod stdio;
mod tools;

pub use cli::App;

use crate::prelude::*;
use serde::{Deserialize, Serialize};

// JSON-RPC 2.0 types
#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    #[serde(default)]
    jsonrpc: String,
    id: Option<serde_json::Value>,
    method: String,
    params: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    jsonrpc: String,
    id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    fn new(
        id: Option<serde_json::Value>,
        outcome: Result<serde_json::Value, JsonRpcError>,
    ) -> Self {
        let (result, error) = match outcome {
            Ok(value) => (Some(value), None),
            Err(error) => (None, Some(error)),
        };
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result,
            error,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

// MCP Protocol types
#[derive(Debug, Serialize)]
pub struct Tool {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        cli::Commands::Stdio => stdio::run_stdio(global).await,
        cli::Commands::Sse(options) => sse::run_sse(options, global).await,
    }
}

/// Answer one JSON-RPC 2.0 message. Notifications (no `id`, method under
/// `notifications/`) are acknowledged silently and yield `None`.
pub async fn handle_request(
    request_str: &str,
    global: &crate::Global,
) -> Option<JsonRpcResponse> {
    let request: JsonRpcRequest = match serde_json::from_str(request_str) {
        Ok(req) => req,
        Err(e) => {
            return Some(JsonRpcResponse::new(
                None,
                Err(JsonRpcError {
                    code: -32700,
                    message: format!("Parse error: {e}"),
                    data: None,
                }),
            ));
        }
    };

    log::debug!("{} (id: {:?})", request.method, request.id);

    if request.id.is_none() && request.method.starts_with("notifications/") {
        return None;
    }

    if request.jsonrpc != "2.0" {
        return Some(JsonRpcResponse::new(
            request.id,
            Err(JsonRpcError {
                code: -32600,
                message: format!("Invalid Request: unsupported jsonrpc {:?}", request.jsonrpc),
                data: None,
            }),
        ));
    }

    let outcome = match request.method.as_str() {
        "initialize" => tools::handle_initialize(),
        "ping" => Ok(serde_json::json!({})),
        "tools/list" => tools::handle_tools_list(),
        "tools/call" => tools::handle_tools_call(request.params, global),
        method => Err(JsonRpcError {
            code: -32601,
            message: format!("Method not found: {method}"),
            data: None,
        }),
    };

    Some(JsonRpcResponse::new(request.id, outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn global() -> crate::Global {
        crate::Global {
            verbose: false,
            json: false,
        }
    }

    async fn call(request: Value) -> Value {
        let response = handle_request(&request.to_string(), &global()).await.unwrap();
        serde_json::to_value(response).unwrap()
    }

    async fn call_tool(name: &str, arguments: Value) -> Value {
        call(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/call",
            "params": { "name": name, "arguments": arguments }
        }))
        .await
    }

    fn text_of(response: &Value) -> &str {
        response["result"]["content"][0]["text"].as_str().unwrap()
    }

    #[tokio::test]
    async fn test_initialize() {
        let response = call(json!({"jsonrpc": "2.0", "id": 1, "method": "initialize"})).await;
        assert_eq!(response["id"], 1);
        assert_eq!(response["result"]["serverInfo"]["name"], "textkit");
        assert_eq!(response["result"]["protocolVersion"], "2024-11-05");
    }

    #[tokio::test]
    async fn test_tools_list_names() {
        let response = call(json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"})).await;
        let names: Vec<&str> = response["result"]["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|tool| tool["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            [
                "text_stats",
                "keyword_density",
                "case_convert",
                "text_transform",
                "format_convert",
                "encode",
                "decode",
                "hash",
                "hmac",
                "curl_to_fetch"
            ]
        );
    }

    #[tokio::test]
    async fn test_parse_error() {
        let response = handle_request("{not json", &global()).await.unwrap();
        let response = serde_json::to_value(response).unwrap();
        assert_eq!(response["error"]["code"], -32700);
        assert!(response["id"].is_null());
    }

    #[tokio::test]
    async fn test_notifications_get_no_response() {
        let request = json!({"jsonrpc": "2.0", "method": "notifications/initialized"});
        assert!(handle_request(&request.to_string(), &global()).await.is_none());
    }

    #[tokio::test]
    async fn test_wrong_version_is_invalid_request() {
        let response = call(json!({"jsonrpc": "1.0", "id": 9, "method": "tools/list"})).await;
        assert_eq!(response["error"]["code"], -32600);

        let response = call(json!({"id": 10, "method": "tools/list"})).await;
        assert_eq!(response["error"]["code"], -32600);
        assert_eq!(response["id"], 10);
    }

    #[tokio::test]
    async fn test_ping() {
        let response = call(json!({"jsonrpc": "2.0", "id": "p", "method": "ping"})).await;
        assert_eq!(response["id"], "p");
        assert_eq!(response["result"], json!({}));
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let response = call(json!({"jsonrpc": "2.0", "id": 3, "method": "resources/list"})).await;
        assert_eq!(response["error"]["code"], -32601);
        assert_eq!(response["id"], 3);
    }

    #[tokio::test]
    async fn test_unknown_tool_and_bad_arguments() {
        let response = call_tool("nope", json!({})).await;
        assert_eq!(response["error"]["code"], -32602);

        let response = call_tool("case_convert", json!({"text": "hi"})).await;
        assert_eq!(response["error"]["code"], -32602);

        let response = call_tool("case_convert", json!({"text": "hi", "case": "shouty"})).await;
        assert_eq!(response["error"]["code"], -32602);

        let response = call_tool("hash", json!({"input": "x", "algorithm": "crc32"})).await;
        assert_eq!(response["error"]["code"], -32602);
    }

    #[tokio::test]
    async fn test_case_convert() {
        let response = call_tool("case_convert", json!({"text": "hello world", "case": "snake"})).await;
        assert_eq!(text_of(&response), "hello_world");
        assert!(response["result"].get("isError").is_none());
    }

    #[tokio::test]
    async fn test_tool_error_is_in_band() {
        let response = call_tool(
            "format_convert",
            json!({"input": "{\"a\": }", "operation": "beautify_json"}),
        )
        .await;
        assert!(response.get("error").is_none());
        assert_eq!(response["result"]["isError"], true);
        assert!(text_of(&response).starts_with("Invalid JSON: "));

        let response = call_tool("decode", json!({"input": "abc", "encoding": "hex"})).await;
        assert_eq!(response["result"]["isError"], true);
        assert_eq!(text_of(&response), "Invalid hex length");
    }

    #[tokio::test]
    async fn test_text_stats_is_json() {
        let response = call_tool("text_stats", json!({"text": "One two three."})).await;
        let stats: Value = serde_json::from_str(text_of(&response)).unwrap();
        assert_eq!(stats["words"], 3);
        assert_eq!(stats["sentences"], 1);
        assert_eq!(stats["reading_time_minutes"], 1);
        assert_eq!(stats["speaking_time_minutes"], 1);

        let response =
            call_tool("text_stats", json!({"text": "One two three.", "model": "quick"})).await;
        let stats: Value = serde_json::from_str(text_of(&response)).unwrap();
        assert!(stats["speaking_time_minutes"].is_null());

        let response = call_tool("text_stats", json!({"text": "x", "model": "slow"})).await;
        assert_eq!(response["error"]["code"], -32602);
    }

    #[tokio::test]
    async fn test_text_transform_find_replace() {
        let response = call_tool(
            "text_transform",
            json!({
                "text": "Cat cat CAT",
                "operation": "find_replace",
                "find": "cat",
                "replace": "dog",
                "case_insensitive": true
            }),
        )
        .await;
        assert_eq!(text_of(&response), "dog dog dog");

        let response = call_tool(
            "text_transform",
            json!({"text": "abc", "operation": "find_replace", "find": "(", "use_regex": true}),
        )
        .await;
        assert_eq!(response["result"]["isError"], true);
    }

    #[tokio::test]
    async fn test_encode_decode_hash() {
        let response = call_tool("encode", json!({"input": "Hello", "encoding": "base64"})).await;
        assert_eq!(text_of(&response), "SGVsbG8=");

        let response = call_tool("decode", json!({"input": "SGVsbG8", "encoding": "base64"})).await;
        assert_eq!(text_of(&response), "Hello");

        let response = call_tool("hash", json!({"input": "abc", "algorithm": "MD5"})).await;
        assert_eq!(text_of(&response), "900150983cd24fb0d6963f7d28e17f72");

        let response = call_tool("hash", json!({"input": "abc", "algorithm": "all"})).await;
        let digests: Value = serde_json::from_str(text_of(&response)).unwrap();
        assert_eq!(digests.as_array().unwrap().len(), 7);
    }

    #[tokio::test]
    async fn test_curl_to_fetch_missing_url() {
        let response = call_tool("curl_to_fetch", json!({"command": "curl -X POST"})).await;
        assert_eq!(response["result"]["isError"], true);
        assert_eq!(text_of(&response), "Could not find URL in cURL command.");
    }
}
