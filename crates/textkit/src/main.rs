use crate::prelude::*;
use clap::Parser;

mod case;
mod codec;
mod curl;
mod error;
mod format;
mod hash;
mod input;
mod mcp;
mod output;
mod prelude;
mod text;
mod transform;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Text statistics, case conversion, formatters, encoders, hashes and cURL translation"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "TEXTKIT_VERBOSE", global = true, default_value = "false")]
    verbose: bool,

    /// Print results as a JSON object instead of plain text.
    #[clap(long, env = "TEXTKIT_JSON", global = true, default_value = "false")]
    json: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Word counts, reading time and keyword density
    Text(crate::text::App),

    /// Convert text between cases
    Case(crate::case::App),

    /// Reverse, deduplicate, sort, slugify and search/replace text
    Transform(crate::transform::App),

    /// Beautify, minify and convert JSON, CSV, XML, YAML, SQL, CSS, HTML and JavaScript
    Format(crate::format::App),

    /// Encode text as Base64, hex, URL or HTML entities
    Encode(crate::codec::EncodeApp),

    /// Decode Base64, hex, URL or HTML-entity text
    Decode(crate::codec::DecodeApp),

    /// Hex digest of the input
    Hash(crate::hash::HashApp),

    /// Keyed HMAC of the input
    Hmac(crate::hash::HmacApp),

    /// Translate a cURL command into a fetch() call
    Curl(crate::curl::App),

    /// Model Context Protocol server
    MCP(crate::mcp::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();
    log::debug!(
        "textkit {} (verbose: {}, json: {})",
        env!("CARGO_PKG_VERSION"),
        app.global.verbose,
        app.global.json
    );

    match app.command {
        SubCommands::Text(sub_app) => crate::text::run(sub_app, app.global),
        SubCommands::Case(sub_app) => crate::case::run(sub_app, app.global),
        SubCommands::Transform(sub_app) => crate::transform::run(sub_app, app.global),
        SubCommands::Format(sub_app) => crate::format::run(sub_app, app.global),
        SubCommands::Encode(sub_app) => crate::codec::run_encode(sub_app, app.global),
        SubCommands::Decode(sub_app) => crate::codec::run_decode(sub_app, app.global),
        SubCommands::Hash(sub_app) => crate::hash::run_hash(sub_app, app.global),
        SubCommands::Hmac(sub_app) => crate::hash::run_hmac(sub_app, app.global),
        SubCommands::Curl(sub_app) => crate::curl::run(sub_app, app.global),
        SubCommands::MCP(sub_app) => crate::mcp::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
