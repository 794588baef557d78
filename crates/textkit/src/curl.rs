use crate::input::{read_input, InputArgs};
use crate::output::output_text;
use crate::prelude::{eprintln, *};
use textkit_core::curl::{curl_to_fetch, parse_curl};

#[derive(Debug, clap::Parser)]
#[command(name = "curl")]
#[command(about = "Translate a cURL command into a JavaScript fetch() call")]
pub struct App {
    #[clap(flatten)]
    pub input: InputArgs,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    let command = read_input(&app.input)?;

    if global.verbose {
        let request = parse_curl(&command)?;
        eprintln!(
            "{} {} ({} header(s), body: {})",
            request.method,
            request.url,
            request.headers.len(),
            request.body.is_some()
        );
    }

    output_text(&global, "curl_to_fetch", &curl_to_fetch(&command)?)
}
