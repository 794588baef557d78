use crate::input::{read_input, InputArgs};
use crate::output::output_text;
use crate::prelude::{eprintln, *};
use colored::Colorize;
use textkit_core::format;

#[derive(Debug, clap::Parser)]
#[command(name = "format")]
#[command(about = "Beautify, minify, validate and convert structured text")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Pretty-print JSON
    #[clap(name = "json")]
    Json(JsonOptions),

    /// Minify JSON
    #[clap(name = "json-min")]
    JsonMin(InputArgs),

    /// Check that the input is valid JSON
    #[clap(name = "json-validate")]
    JsonValidate(InputArgs),

    /// Convert CSV with a header row into a JSON array of objects
    #[clap(name = "csv-to-json")]
    CsvToJson(InputArgs),

    /// Convert a JSON array of objects into CSV
    #[clap(name = "json-to-csv")]
    JsonToCsv(InputArgs),

    /// Pretty-print XML
    #[clap(name = "xml")]
    Xml(InputArgs),

    /// Minify XML
    #[clap(name = "xml-min")]
    XmlMin(InputArgs),

    /// Normalize YAML
    #[clap(name = "yaml")]
    Yaml(InputArgs),

    /// Check that the input is valid YAML
    #[clap(name = "yaml-validate")]
    YamlValidate(InputArgs),

    /// Format SQL with uppercase keywords
    #[clap(name = "sql")]
    Sql(InputArgs),

    /// Minify CSS
    #[clap(name = "css-min")]
    CssMin(InputArgs),

    /// Minify HTML
    #[clap(name = "html-min")]
    HtmlMin(InputArgs),

    /// Minify JavaScript
    #[clap(name = "js-min")]
    JsMin(InputArgs),
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum Indent {
    /// Two spaces
    #[default]
    Two,
    /// Four spaces
    Four,
    /// A tab character
    Tab,
}

impl From<Indent> for format::Indent {
    fn from(indent: Indent) -> Self {
        match indent {
            Indent::Two => format::Indent::Two,
            Indent::Four => format::Indent::Four,
            Indent::Tab => format::Indent::Tab,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct JsonOptions {
    #[clap(flatten)]
    pub input: InputArgs,

    /// Indentation
    #[arg(long, env = "TEXTKIT_JSON_INDENT", default_value = "two")]
    pub indent: Indent,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    let (tool, formatted) = match app.command {
        Commands::Json(options) => {
            let text = read_input(&options.input)?;
            ("beautify_json", format::beautify_json(&text, options.indent.into())?)
        }
        Commands::JsonMin(input) => ("minify_json", format::minify_json(&read_input(&input)?)?),
        Commands::JsonValidate(input) => {
            format::validate_json(&read_input(&input)?)?;
            return valid(&global, "validate_json", "JSON");
        }
        Commands::CsvToJson(input) => ("csv_to_json", format::csv_to_json(&read_input(&input)?)?),
        Commands::JsonToCsv(input) => ("json_to_csv", format::json_to_csv(&read_input(&input)?)?),
        Commands::Xml(input) => ("beautify_xml", format::beautify_xml(&read_input(&input)?)?),
        Commands::XmlMin(input) => ("minify_xml", format::minify_xml(&read_input(&input)?)?),
        Commands::Yaml(input) => ("beautify_yaml", format::beautify_yaml(&read_input(&input)?)?),
        Commands::YamlValidate(input) => {
            format::validate_yaml(&read_input(&input)?)?;
            return valid(&global, "validate_yaml", "YAML");
        }
        Commands::Sql(input) => ("format_sql", format::format_sql(&read_input(&input)?)?),
        Commands::CssMin(input) => ("minify_css", format::minify_css(&read_input(&input)?)),
        Commands::HtmlMin(input) => ("minify_html", format::minify_html(&read_input(&input)?)),
        Commands::JsMin(input) => ("minify_js", format::minify_js(&read_input(&input)?)),
    };

    output_text(&global, tool, &formatted)
}

fn valid(global: &crate::Global, tool: &str, label: &str) -> Result<()> {
    let message = format!("Valid {label}");
    if global.json {
        return crate::output::output_json(tool, &message);
    }

    eprintln!("{}", message.green());
    Ok(())
}
