use crate::input::{read_input, InputArgs};
use crate::output::output_text;
use crate::prelude::*;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Case {
    /// UPPER CASE
    Upper,
    /// lower case
    Lower,
    /// Title Case
    Title,
    /// Sentence case
    Sentence,
    /// camelCase
    Camel,
    /// snake_case
    Snake,
    /// kebab-case
    Kebab,
    /// aLtErNaTiNg cAsE
    Alternating,
}

impl From<Case> for textkit_core::case::Case {
    fn from(c: Case) -> Self {
        match c {
            Case::Upper => textkit_core::case::Case::Upper,
            Case::Lower => textkit_core::case::Case::Lower,
            Case::Title => textkit_core::case::Case::Title,
            Case::Sentence => textkit_core::case::Case::Sentence,
            Case::Camel => textkit_core::case::Case::Camel,
            Case::Snake => textkit_core::case::Case::Snake,
            Case::Kebab => textkit_core::case::Case::Kebab,
            Case::Alternating => textkit_core::case::Case::Alternating,
        }
    }
}

#[derive(Debug, clap::Parser)]
#[command(name = "case")]
#[command(about = "Convert text between cases")]
pub struct App {
    /// Target case
    pub case: Case,

    #[clap(flatten)]
    pub input: InputArgs,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    let text = read_input(&app.input)?;
    let converted = textkit_core::case::convert_case(&text, app.case.into());
    output_text(&global, "case_convert", &converted)
}
