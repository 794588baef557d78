use crate::prelude::{eprintln, *};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Newline-delimited JSON-RPC on stdin/stdout until stdin closes.
pub async fn run_stdio(global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("textkit MCP server on stdio, waiting for requests...");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let mut handled = 0usize;

    while let Some(line) = lines.next_line().await? {
        let message = line.trim();
        if message.is_empty() {
            continue;
        }

        if global.verbose {
            eprintln!("<- {message}");
        }

        let Some(response) = super::handle_request(message, &global).await else {
            continue;
        };
        let mut payload = serde_json::to_vec(&response)?;

        if global.verbose {
            eprintln!("-> {}", String::from_utf8_lossy(&payload));
        }

        payload.push(b'\n');
        stdout.write_all(&payload).await?;
        stdout.flush().await?;
        handled += 1;
    }

    log::debug!("stdin closed after {handled} response(s)");

    Ok(())
}
