use crate::input::{read_input, InputArgs};
use crate::output::{banner, is_tty, output_json};
use crate::prelude::{println, *};
use colored::Colorize;
use textkit_core::stats::{analyze, keyword_density, KeywordCount, ReadingModel, TextStats};

#[derive(Debug, clap::Parser)]
#[command(name = "text")]
#[command(about = "Word counts, reading time and keyword density")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Count words, characters, sentences and paragraphs
    #[clap(name = "stats")]
    Stats(StatsOptions),

    /// List the most frequent keywords
    #[clap(name = "keywords")]
    Keywords(KeywordsOptions),
}

/// Shared by `text stats --model` and the `text_stats` MCP tool.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingPreset {
    /// 225 wpm reading, 130 wpm speaking
    #[default]
    Standard,
    /// 200 wpm reading only
    Quick,
}

impl From<ReadingPreset> for ReadingModel {
    fn from(preset: ReadingPreset) -> Self {
        match preset {
            ReadingPreset::Standard => ReadingModel::STANDARD,
            ReadingPreset::Quick => ReadingModel::QUICK,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct StatsOptions {
    #[clap(flatten)]
    pub input: InputArgs,

    /// Reading speed preset
    #[arg(long, env = "TEXTKIT_READING_MODEL", default_value = "standard")]
    pub model: ReadingPreset,
}

#[derive(Debug, Clone, clap::Args)]
pub struct KeywordsOptions {
    #[clap(flatten)]
    pub input: InputArgs,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Stats(options) => stats(options, &global),
        Commands::Keywords(options) => keywords(options, &global),
    }
}

fn stats(options: StatsOptions, global: &crate::Global) -> Result<()> {
    let text = read_input(&options.input)?;
    let stats = analyze(&text, options.model.into());

    if global.json {
        return output_json("text_stats", &stats);
    }

    output_stats(&stats);
    Ok(())
}

fn keywords(options: KeywordsOptions, global: &crate::Global) -> Result<()> {
    let text = read_input(&options.input)?;
    let keywords = keyword_density(&text);

    if global.json {
        return output_json("keyword_density", &keywords);
    }

    output_keywords(&keywords);
    Ok(())
}

fn output_stats(stats: &TextStats) {
    if is_tty() {
        banner("Text statistics");
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["Words", stats.words]);
    table.add_row(prettytable::row!["Characters", stats.chars]);
    table.add_row(prettytable::row!["Characters (no spaces)", stats.chars_no_spaces]);
    table.add_row(prettytable::row!["Graphemes", stats.graphemes]);
    table.add_row(prettytable::row!["Sentences", stats.sentences]);
    table.add_row(prettytable::row!["Paragraphs", stats.paragraphs]);
    table.add_row(prettytable::row!["Lines", stats.lines]);
    table.add_row(prettytable::row![
        "Reading time",
        format!("{} min", stats.reading_time_minutes)
    ]);
    if let Some(minutes) = stats.speaking_time_minutes {
        table.add_row(prettytable::row!["Speaking time", format!("{minutes} min")]);
    }
    table.printstd();
}

fn output_keywords(keywords: &[KeywordCount]) {
    if keywords.is_empty() {
        println!("{}", "No keywords found.".yellow());
        return;
    }

    if is_tty() {
        banner("Keyword density");
    }

    let mut table = new_table();
    table.set_titles(prettytable::row!["Keyword", "Count", "Density"]);
    for keyword in keywords {
        table.add_row(prettytable::row![
            keyword.word,
            keyword.count,
            format!("{:.2}%", keyword.density)
        ]);
    }
    table.printstd();
}
