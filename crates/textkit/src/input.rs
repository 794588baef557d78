use crate::prelude::*;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, clap::Args)]
pub struct InputArgs {
    /// Text to process. Read from stdin when omitted
    pub input: Option<String>,

    /// Read the text from a file instead
    #[arg(short, long, conflicts_with = "input")]
    pub file: Option<PathBuf>,
}

/// Resolve the input text: positional argument, then `--file`, then stdin.
pub fn read_input(args: &InputArgs) -> Result<String> {
    let stdin = std::io::stdin();
    let is_tty = stdin.is_terminal();
    Ok(resolve(args, stdin.lock(), is_tty)?)
}

/// Stdin input loses one trailing line break so `echo text | textkit ...`
/// behaves like passing `text` as an argument.
fn resolve(args: &InputArgs, mut stdin: impl Read, stdin_is_tty: bool) -> Result<String, Error> {
    if let Some(input) = &args.input {
        return Ok(input.clone());
    }

    if let Some(path) = &args.file {
        return std::fs::read_to_string(path).map_err(|source| Error::ReadFile {
            path: path.display().to_string(),
            source,
        });
    }

    if stdin_is_tty {
        return Err(Error::MissingInput);
    }

    let mut buf = String::new();
    stdin.read_to_string(&mut buf).map_err(Error::ReadStdin)?;

    let trimmed = buf
        .strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest));
    Ok(trimmed.map(str::to_string).unwrap_or(buf))
}
