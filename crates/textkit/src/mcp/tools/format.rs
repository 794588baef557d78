use crate::prelude::{eprintln, *};
use serde::Deserialize;
use textkit_core::format::{self, Indent};

use super::{parse_args, tool_result, JsonRpcError};

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum Operation {
    BeautifyJson,
    MinifyJson,
    ValidateJson,
    CsvToJson,
    JsonToCsv,
    BeautifyXml,
    MinifyXml,
    BeautifyYaml,
    ValidateYaml,
    FormatSql,
    MinifyCss,
    MinifyHtml,
    MinifyJs,
}

pub fn handle_format_convert(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct FormatConvertArgs {
        input: String,
        operation: Operation,
        #[serde(default)]
        indent: Indent,
    }

    let args: FormatConvertArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!(
            "Calling format_convert: operation={:?}, {} bytes",
            args.operation,
            args.input.len()
        );
    }

    let input = &args.input;
    let outcome = match args.operation {
        Operation::BeautifyJson => format::beautify_json(input, args.indent),
        Operation::MinifyJson => format::minify_json(input),
        Operation::ValidateJson => format::validate_json(input).map(|()| "Valid JSON".to_string()),
        Operation::CsvToJson => format::csv_to_json(input),
        Operation::JsonToCsv => format::json_to_csv(input),
        Operation::BeautifyXml => format::beautify_xml(input),
        Operation::MinifyXml => format::minify_xml(input),
        Operation::BeautifyYaml => format::beautify_yaml(input),
        Operation::ValidateYaml => format::validate_yaml(input).map(|()| "Valid YAML".to_string()),
        Operation::FormatSql => format::format_sql(input),
        Operation::MinifyCss => Ok(format::minify_css(input)),
        Operation::MinifyHtml => Ok(format::minify_html(input)),
        Operation::MinifyJs => Ok(format::minify_js(input)),
    };

    tool_result(outcome)
}
