use base64::alphabet;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::error::{ToolError, ToolResult};

/// Standard alphabet that accepts input with or without `=` padding.
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Characters `encodeURIComponent` leaves alone: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// `encodeURI` additionally keeps the URI delimiters.
const URI: &AsciiSet = &COMPONENT
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'#');

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlMode {
    /// Encode a single query value or path segment.
    #[default]
    Component,
    /// Encode a whole URI, keeping its delimiters.
    Uri,
}

fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

pub fn base64_encode(input: &str) -> String {
    STANDARD.encode(input.as_bytes())
}

pub fn base64_decode(input: &str) -> ToolResult<String> {
    let bytes = LENIENT_STANDARD
        .decode(strip_whitespace(input))
        .map_err(|e| ToolError::encoding("Base64 string", e))?;
    String::from_utf8(bytes).map_err(|e| ToolError::encoding("Base64 string", e))
}

/// URL-safe alphabet, padding stripped.
pub fn base64url_encode(input: &str) -> String {
    URL_SAFE_NO_PAD.encode(input.as_bytes())
}

pub fn base64url_decode(input: &str) -> ToolResult<String> {
    let mut standard: String = strip_whitespace(input)
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            c => c,
        })
        .collect();
    while standard.len() % 4 != 0 {
        standard.push('=');
    }

    let bytes = STANDARD
        .decode(standard)
        .map_err(|e| ToolError::encoding("Base64URL string", e))?;
    String::from_utf8(bytes).map_err(|e| ToolError::encoding("Base64URL string", e))
}

/// Two or more lowercase hex digits per UTF-16 code unit.
pub fn text_to_hex(input: &str) -> String {
    input.encode_utf16().map(|unit| format!("{unit:02x}")).collect()
}

/// Decode pairs of hex digits into characters `U+0000..=U+00FF`.
pub fn hex_to_text(input: &str) -> ToolResult<String> {
    let cleaned = strip_whitespace(input);
    if cleaned.chars().count() % 2 != 0 {
        return Err(ToolError::InvalidEncoding("Invalid hex length".to_string()));
    }

    let bytes = hex::decode(&cleaned).map_err(|e| match e {
        hex::FromHexError::InvalidHexCharacter { c, index } => ToolError::InvalidEncoding(
            format!("Invalid hex character '{c}' at position {index}"),
        ),
        hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
            ToolError::InvalidEncoding("Invalid hex length".to_string())
        }
    })?;

    Ok(bytes.into_iter().map(char::from).collect())
}

pub fn url_encode(input: &str, mode: UrlMode) -> String {
    let set = match mode {
        UrlMode::Component => COMPONENT,
        UrlMode::Uri => URI,
    };
    utf8_percent_encode(input, set).to_string()
}

pub fn url_decode(input: &str) -> ToolResult<String> {
    let bytes = input.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b != b'%' {
            continue;
        }
        let valid = bytes
            .get(i + 1..i + 3)
            .is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit));
        if !valid {
            return Err(ToolError::encoding(
                "URL encoding",
                format!("malformed escape sequence at position {i}"),
            ));
        }
    }

    percent_decode_str(input)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|e| ToolError::encoding("URL encoding", e))
}

/// Replace `<`, `>`, `&` and every character in `U+00A0..=U+9999` with a
/// numeric character reference.
pub fn html_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '<' | '>' | '&' | '\u{00A0}'..='\u{9999}') {
            out.push_str(&format!("&#{};", c as u32));
        } else {
            out.push(c);
        }
    }
    out
}

/// Resolve named and numeric entities; unknown entities are left as-is.
pub fn html_decode(input: &str) -> String {
    html_escape::decode_html_entities(input).into_owned()
}
