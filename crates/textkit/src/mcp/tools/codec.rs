use crate::prelude::{eprintln, *};
use serde::Deserialize;
use textkit_core::encode::{self, UrlMode};
use textkit_core::hash::{self, HashAlgorithm};

use super::{invalid_arguments, json_text, parse_args, tool_result, JsonRpcError};

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Encoding {
    Base64,
    Base64url,
    Hex,
    Url,
    Html,
}

#[derive(Deserialize)]
struct CodecArgs {
    input: String,
    encoding: Encoding,
    #[serde(default)]
    url_mode: UrlMode,
}

pub fn handle_encode(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let args: CodecArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!("Calling encode: encoding={:?}", args.encoding);
    }

    let input = &args.input;
    let encoded = match args.encoding {
        Encoding::Base64 => encode::base64_encode(input),
        Encoding::Base64url => encode::base64url_encode(input),
        Encoding::Hex => encode::text_to_hex(input),
        Encoding::Url => encode::url_encode(input, args.url_mode),
        Encoding::Html => encode::html_encode(input),
    };

    tool_result(Ok(encoded))
}

pub fn handle_decode(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let args: CodecArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!("Calling decode: encoding={:?}", args.encoding);
    }

    let input = &args.input;
    let outcome = match args.encoding {
        Encoding::Base64 => encode::base64_decode(input),
        Encoding::Base64url => encode::base64url_decode(input),
        Encoding::Hex => encode::hex_to_text(input),
        Encoding::Url => encode::url_decode(input),
        Encoding::Html => Ok(encode::html_decode(input)),
    };

    tool_result(outcome)
}

/// `None` means every algorithm.
fn parse_algorithm(name: Option<&str>) -> Result<Option<HashAlgorithm>, JsonRpcError> {
    match name {
        None => Ok(Some(HashAlgorithm::default())),
        Some(name) if name.eq_ignore_ascii_case("all") => Ok(None),
        Some(name) => name.parse().map(Some).map_err(invalid_arguments),
    }
}

pub fn handle_hash(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct HashArgs {
        input: String,
        algorithm: Option<String>,
    }

    let args: HashArgs = parse_args(arguments)?;
    let algorithm = parse_algorithm(args.algorithm.as_deref())?;

    if global.verbose {
        eprintln!("Calling hash: algorithm={:?}", algorithm);
    }

    let outcome = match algorithm {
        Some(algorithm) => Ok(hash::hash(&args.input, algorithm)),
        None => json_text(&hash::hash_all(&args.input)),
    };

    tool_result(outcome)
}

pub fn handle_hmac(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct HmacArgs {
        message: String,
        key: String,
        algorithm: Option<String>,
    }

    let args: HmacArgs = parse_args(arguments)?;
    let algorithm = match args.algorithm.as_deref() {
        Some(name) => name.parse::<HashAlgorithm>().map_err(invalid_arguments)?,
        None => HashAlgorithm::default(),
    };

    if global.verbose {
        eprintln!("Calling hmac: algorithm={algorithm}");
    }

    tool_result(hash::hmac(&args.message, &args.key, algorithm))
}
