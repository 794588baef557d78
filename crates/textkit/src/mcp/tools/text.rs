use crate::prelude::{eprintln, *};
use crate::text::ReadingPreset;
use serde::Deserialize;
use textkit_core::case::{convert_case, Case};
use textkit_core::stats::{analyze, keyword_density};
use textkit_core::transform::{self, FindReplace, SortOrder};

use super::{json_text, parse_args, tool_result, JsonRpcError};

pub fn handle_text_stats(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct TextStatsArgs {
        text: String,
        #[serde(default)]
        model: ReadingPreset,
    }

    let args: TextStatsArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!("Calling text_stats: {} bytes, model={:?}", args.text.len(), args.model);
    }

    tool_result(json_text(&analyze(&args.text, args.model.into())))
}

pub fn handle_keyword_density(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct KeywordDensityArgs {
        text: String,
    }

    let args: KeywordDensityArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!("Calling keyword_density: {} bytes", args.text.len());
    }

    tool_result(json_text(&keyword_density(&args.text)))
}

pub fn handle_case_convert(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct CaseConvertArgs {
        text: String,
        case: Case,
    }

    let args: CaseConvertArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!("Calling case_convert: case={:?}", args.case);
    }

    tool_result(Ok(convert_case(&args.text, args.case)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum Operation {
    Reverse,
    ReverseWords,
    Palindrome,
    DedupLines,
    Slugify,
    SortAsc,
    SortDesc,
    RemoveExtraSpaces,
    FindReplace,
}

pub fn handle_text_transform(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct TextTransformArgs {
        text: String,
        operation: Operation,
        find: Option<String>,
        replace: Option<String>,
        #[serde(default)]
        use_regex: bool,
        #[serde(default)]
        case_insensitive: bool,
    }

    let args: TextTransformArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!("Calling text_transform: operation={:?}", args.operation);
    }

    let text = &args.text;
    let outcome = match args.operation {
        Operation::Reverse => Ok(transform::reverse_chars(text)),
        Operation::ReverseWords => Ok(transform::reverse_words(text)),
        Operation::Palindrome => json_text(&transform::check_palindrome(text)),
        Operation::DedupLines => json_text(&transform::dedup_lines(text)),
        Operation::Slugify => Ok(transform::slugify(text)),
        Operation::SortAsc => Ok(transform::sort_lines(text, SortOrder::Asc)),
        Operation::SortDesc => Ok(transform::sort_lines(text, SortOrder::Desc)),
        Operation::RemoveExtraSpaces => Ok(transform::remove_extra_spaces(text)),
        Operation::FindReplace => {
            let options = FindReplace {
                find: args.find.unwrap_or_default(),
                replace: args.replace.unwrap_or_default(),
                use_regex: args.use_regex,
                case_insensitive: args.case_insensitive,
            };
            transform::find_replace(text, &options)
        }
    };

    tool_result(outcome)
}
