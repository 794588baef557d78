use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use serde::Serialize;
use std::io::IsTerminal;

#[derive(Debug, Serialize)]
struct Envelope<'a, T: Serialize> {
    tool: &'a str,
    output: &'a T,
}

/// Whether decorations (banners, colors, tables) should be shown.
pub fn is_tty() -> bool {
    std::io::stdout().is_terminal()
}

pub fn output_json<T: Serialize>(tool: &str, output: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(&Envelope { tool, output })?;
    println!("{}", json);
    Ok(())
}

/// Print a section header to stderr so piped stdout stays clean.
pub fn banner(title: &str) {
    eprintln!("{}", "=".repeat(80).bright_cyan());
    eprintln!("{}", title.to_uppercase().bright_cyan().bold());
    eprintln!("{}", "=".repeat(80).bright_cyan());
}

/// Print a plain-text tool result, or the JSON envelope with `--json`.
pub fn output_text(global: &crate::Global, tool: &str, text: &str) -> Result<()> {
    if global.json {
        return output_json(tool, &text);
    }

    if is_tty() {
        banner(tool);
    }
    println!("{}", text);

    Ok(())
}
