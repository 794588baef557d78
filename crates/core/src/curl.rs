//! Translate a cURL command into a `fetch` snippet.
//!
//! Extraction is pattern based and covers the common shapes copied from
//! browser dev tools and API docs: a URL, `-X`, `-H` and `-d`/`--data-raw`
//! with quoted values. It is not a shell parser: escaped quotes, `$'...'`
//! strings, variables and multi-value flags like `-F` are not understood.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ToolError, ToolResult};

const URL_NOT_FOUND: &str = "Could not find URL in cURL command.";

/// Flags whose next token is their argument rather than the URL.
const FLAGS_WITH_VALUE: &[&str] = &[
    "-X",
    "--request",
    "-H",
    "--header",
    "-d",
    "--data",
    "--data-raw",
    "--data-binary",
    "--data-urlencode",
    "-u",
    "--user",
    "-A",
    "--user-agent",
    "-b",
    "--cookie",
    "-e",
    "--referer",
    "-o",
    "--output",
    "-F",
    "--form",
];

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"'([^']*)'|"([^"]*)"|(\S+)"#).expect("token pattern is valid"));

static CURL_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)curl\b").expect("curl pattern is valid"));

static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:^|\s)(?:-H|--header)\s+(?:'([^']*)'|"([^"]*)")"#)
        .expect("header pattern is valid")
});

static BODY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:^|\s)(?:--data-raw|--data|-d)\s+(?:'([^']*)'|"([^"]*)")"#)
        .expect("body pattern is valid")
});

static METHOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:^|\s)(?:-X|--request)\s+['"]?([A-Za-z]+)['"]?"#)
        .expect("method pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurlRequest {
    pub url: String,
    pub method: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Value of the first capture group that matched.
fn first_group(caps: &regex::Captures<'_>) -> Option<String> {
    (1..caps.len())
        .find_map(|i| caps.get(i))
        .map(|m| m.as_str().to_string())
}

/// First quoted or bare token after `curl` that is not a flag or a flag's argument.
fn find_url(command: &str) -> Option<String> {
    let start = CURL_START.find(command)?.end();
    let mut tokens = TOKEN.captures_iter(&command[start..]);

    while let Some(caps) = tokens.next() {
        // Bare tokens may be flags; quoted tokens never are.
        if let Some(bare) = caps.get(3).map(|m| m.as_str()) {
            if bare == "\\" {
                continue;
            }
            if bare == "--url" {
                return tokens.next().and_then(|next| first_group(&next));
            }
            if bare.starts_with('-') {
                if FLAGS_WITH_VALUE.contains(&bare) {
                    tokens.next();
                }
                continue;
            }
        }
        return first_group(&caps).filter(|url| !url.is_empty());
    }

    None
}

/// Extract URL, method, headers and body from a cURL command.
pub fn parse_curl(command: &str) -> ToolResult<CurlRequest> {
    let url = find_url(command).ok_or_else(|| ToolError::Parse(URL_NOT_FOUND.to_string()))?;

    let headers = HEADER
        .captures_iter(command)
        .filter_map(|caps| first_group(&caps))
        .filter_map(|raw| {
            raw.split_once(": ")
                .map(|(key, value)| (key.to_string(), value.to_string()))
        })
        .collect();

    let body = BODY.captures(command).and_then(|caps| first_group(&caps));

    let method = METHOD
        .captures(command)
        .and_then(|caps| first_group(&caps))
        .map(|m| m.to_uppercase())
        .unwrap_or_else(|| if body.is_some() { "POST" } else { "GET" }.to_string());

    Ok(CurlRequest {
        url,
        method,
        headers,
        body,
    })
}

/// Quote as a single-quoted JavaScript string literal.
fn js_quote(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// JSON bodies are embedded as object literals, anything else as a string.
fn body_expression(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value.to_string(),
        Err(_) => serde_json::Value::String(body.to_string()).to_string(),
    }
}

/// Render a request as a `fetch` call. `headers` and `body` are only emitted
/// when present.
pub fn render_fetch(request: &CurlRequest) -> String {
    let mut fields = vec![format!("  method: {}", js_quote(&request.method))];

    if !request.headers.is_empty() {
        let headers = request
            .headers
            .iter()
            .map(|(key, value)| format!("    {}: {}", js_quote(key), js_quote(value)))
            .collect::<Vec<_>>()
            .join(",\n");
        fields.push(format!("  headers: {{\n{headers}\n  }}"));
    }

    if let Some(body) = &request.body {
        fields.push(format!("  body: JSON.stringify({})", body_expression(body)));
    }

    format!(
        "fetch({}, {{\n{}\n}})\n  .then(response => response.json())\n  .then(data => console.log(data))\n  .catch(error => console.error('Error:', error));",
        js_quote(&request.url),
        fields.join(",\n")
    )
}

pub fn curl_to_fetch(command: &str) -> ToolResult<String> {
    parse_curl(command).map(|request| render_fetch(&request))
}
