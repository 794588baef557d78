use crate::input::{read_input, InputArgs};
use crate::output::output_text;
use crate::prelude::*;
use textkit_core::encode::{self, UrlMode};

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum Mode {
    /// Encode a single query value or path segment
    #[default]
    Component,
    /// Encode a whole URI, keeping `:/?#&=` and friends
    Uri,
}

impl From<Mode> for UrlMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Component => UrlMode::Component,
            Mode::Uri => UrlMode::Uri,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct UrlOptions {
    #[clap(flatten)]
    pub input: InputArgs,

    /// What the input is
    #[arg(long, default_value = "component")]
    pub mode: Mode,
}

#[derive(Debug, clap::Parser)]
#[command(name = "encode")]
#[command(about = "Encode text as Base64, hex, URL or HTML entities")]
pub struct EncodeApp {
    #[command(subcommand)]
    pub command: EncodeCommands,
}

#[derive(Debug, clap::Subcommand)]
pub enum EncodeCommands {
    /// Standard Base64 of the UTF-8 bytes
    #[clap(name = "base64")]
    Base64(InputArgs),

    /// URL-safe Base64 without padding
    #[clap(name = "base64url")]
    Base64Url(InputArgs),

    /// Two hex digits per UTF-16 code unit
    #[clap(name = "hex")]
    Hex(InputArgs),

    /// Percent-encoding
    #[clap(name = "url")]
    Url(UrlOptions),

    /// HTML entities for markup characters and non-ASCII text
    #[clap(name = "html")]
    Html(InputArgs),
}

#[derive(Debug, clap::Parser)]
#[command(name = "decode")]
#[command(about = "Decode Base64, hex, URL or HTML-entity text")]
pub struct DecodeApp {
    #[command(subcommand)]
    pub command: DecodeCommands,
}

#[derive(Debug, clap::Subcommand)]
pub enum DecodeCommands {
    /// Standard Base64, padding optional
    #[clap(name = "base64")]
    Base64(InputArgs),

    /// URL-safe Base64, padding optional
    #[clap(name = "base64url")]
    Base64Url(InputArgs),

    /// Hex digits, whitespace ignored
    #[clap(name = "hex")]
    Hex(InputArgs),

    /// Percent-encoded text
    #[clap(name = "url")]
    Url(InputArgs),

    /// Named and numeric HTML entities
    #[clap(name = "html")]
    Html(InputArgs),
}

pub fn run_encode(app: EncodeApp, global: crate::Global) -> Result<()> {
    let encoded = match app.command {
        EncodeCommands::Base64(input) => encode::base64_encode(&read_input(&input)?),
        EncodeCommands::Base64Url(input) => encode::base64url_encode(&read_input(&input)?),
        EncodeCommands::Hex(input) => encode::text_to_hex(&read_input(&input)?),
        EncodeCommands::Url(options) => {
            encode::url_encode(&read_input(&options.input)?, options.mode.into())
        }
        EncodeCommands::Html(input) => encode::html_encode(&read_input(&input)?),
    };

    output_text(&global, "encode", &encoded)
}

pub fn run_decode(app: DecodeApp, global: crate::Global) -> Result<()> {
    let decoded = match app.command {
        DecodeCommands::Base64(input) => encode::base64_decode(&read_input(&input)?)?,
        DecodeCommands::Base64Url(input) => encode::base64url_decode(&read_input(&input)?)?,
        DecodeCommands::Hex(input) => encode::hex_to_text(&read_input(&input)?)?,
        DecodeCommands::Url(input) => encode::url_decode(&read_input(&input)?)?,
        DecodeCommands::Html(input) => encode::html_decode(&read_input(&input)?),
    };

    output_text(&global, "decode", &decoded)
}
