use crate::input::{read_input, InputArgs};
use crate::output::{output_json, output_text};
use crate::prelude::{eprintln, *};
use colored::Colorize;
use textkit_core::transform::{self, FindReplace, SortOrder};

#[derive(Debug, clap::Parser)]
#[command(name = "transform")]
#[command(about = "Reverse, deduplicate, slugify and search/replace text")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Reverse the characters of the text
    #[clap(name = "reverse")]
    Reverse(InputArgs),

    /// Reverse the order of the words
    #[clap(name = "reverse-words")]
    ReverseWords(InputArgs),

    /// Check whether the text is a palindrome
    #[clap(name = "palindrome")]
    Palindrome(InputArgs),

    /// Remove duplicate lines, keeping the first occurrence
    #[clap(name = "dedup")]
    Dedup(InputArgs),

    /// Turn the text into a URL slug
    #[clap(name = "slug")]
    Slug(InputArgs),

    /// Sort lines alphabetically
    #[clap(name = "sort")]
    Sort(SortOptions),

    /// Collapse repeated spaces and trim every line
    #[clap(name = "spaces")]
    Spaces(InputArgs),

    /// Find and replace text, literally or with a regular expression
    #[clap(name = "replace")]
    Replace(ReplaceOptions),
}

#[derive(Debug, Clone, clap::Args)]
pub struct SortOptions {
    #[clap(flatten)]
    pub input: InputArgs,

    /// Sort in descending order
    #[arg(long)]
    pub desc: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ReplaceOptions {
    #[clap(flatten)]
    pub input: InputArgs,

    /// Text or pattern to search for
    #[arg(long)]
    pub find: String,

    /// Replacement text. With --regex, `$1` refers to capture groups
    #[arg(long, default_value = "")]
    pub replace: String,

    /// Treat --find as a regular expression
    #[arg(long)]
    pub regex: bool,

    /// Match case-insensitively
    #[arg(short = 'i', long)]
    pub ignore_case: bool,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Reverse(input) => {
            let text = read_input(&input)?;
            output_text(&global, "reverse", &transform::reverse_chars(&text))
        }
        Commands::ReverseWords(input) => {
            let text = read_input(&input)?;
            output_text(&global, "reverse_words", &transform::reverse_words(&text))
        }
        Commands::Palindrome(input) => palindrome(input, &global),
        Commands::Dedup(input) => dedup(input, &global),
        Commands::Slug(input) => {
            let text = read_input(&input)?;
            output_text(&global, "slug", &transform::slugify(&text))
        }
        Commands::Sort(options) => {
            let text = read_input(&options.input)?;
            let order = if options.desc {
                SortOrder::Desc
            } else {
                SortOrder::Asc
            };
            output_text(&global, "sort_lines", &transform::sort_lines(&text, order))
        }
        Commands::Spaces(input) => {
            let text = read_input(&input)?;
            output_text(
                &global,
                "remove_extra_spaces",
                &transform::remove_extra_spaces(&text),
            )
        }
        Commands::Replace(options) => replace(options, &global),
    }
}

fn palindrome(input: InputArgs, global: &crate::Global) -> Result<()> {
    let text = read_input(&input)?;
    let result = transform::check_palindrome(&text);

    if global.json {
        return output_json("palindrome", &result);
    }

    if result.is_palindrome {
        crate::prelude::println!("{}", result.message.green());
    } else {
        crate::prelude::println!("{}", result.message.red());
    }
    Ok(())
}

fn dedup(input: InputArgs, global: &crate::Global) -> Result<()> {
    let text = read_input(&input)?;
    let result = transform::dedup_lines(&text);

    if global.json {
        return output_json("dedup_lines", &result);
    }

    crate::prelude::println!("{}", result.text);
    eprintln!(
        "{}",
        format!("Removed {} duplicate line(s)", result.removed).bright_yellow()
    );
    Ok(())
}

fn replace(options: ReplaceOptions, global: &crate::Global) -> Result<()> {
    let text = read_input(&options.input)?;

    if global.verbose {
        eprintln!(
            "Replacing {:?} (regex: {}, ignore case: {})",
            options.find, options.regex, options.ignore_case
        );
    }

    let replaced = transform::find_replace(
        &text,
        &FindReplace {
            find: options.find,
            replace: options.replace,
            use_regex: options.regex,
            case_insensitive: options.ignore_case,
        },
    )?;

    output_text(global, "find_replace", &replaced)
}
