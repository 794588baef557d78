//! Structured-data formatters and converters.
//!
//! JSON, CSV, XML, YAML and SQL go through real parsers and fail with
//! [`ToolError::Parse`](crate::error::ToolError::Parse) on bad input. The
//! CSS, HTML and JS minifiers in [`minify`] are pattern based and never fail.

pub mod csv;
pub mod json;
pub mod minify;
pub mod sql;
pub mod xml;
pub mod yaml;

pub use self::csv::{csv_to_json, json_to_csv};
pub use json::{beautify_json, minify_json, validate_json, Indent};
pub use minify::{minify_css, minify_html, minify_js};
pub use sql::format_sql;
pub use xml::{beautify_xml, minify_xml};
pub use yaml::{beautify_yaml, validate_yaml};
