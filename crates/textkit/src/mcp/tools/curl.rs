use crate::prelude::{eprintln, *};
use serde::Deserialize;

use super::{parse_args, tool_result, JsonRpcError};

pub fn handle_curl_to_fetch(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct CurlToFetchArgs {
        command: String,
    }

    let args: CurlToFetchArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!("Calling curl_to_fetch: {} bytes", args.command.len());
    }

    tool_result(textkit_core::curl::curl_to_fetch(&args.command))
}
