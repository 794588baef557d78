use crate::input::{read_input, InputArgs};
use crate::output::{banner, is_tty, output_json, output_text};
use crate::prelude::{eprintln, *};
use textkit_core::hash::{self, HashAlgorithm, HashOutput};

#[derive(Debug, clap::Parser)]
#[command(name = "hash")]
#[command(about = "Hex digest of the input (MD5, SHA family, RIPEMD-160)")]
pub struct HashApp {
    #[clap(flatten)]
    pub input: InputArgs,

    /// Digest algorithm, e.g. `sha256`, `SHA-512`, `md5`
    #[arg(short, long, env = "TEXTKIT_HASH_ALGORITHM", default_value = "sha256")]
    pub algorithm: HashAlgorithm,

    /// Print every supported digest, ignoring --algorithm
    #[arg(long)]
    pub all: bool,
}

#[derive(Debug, clap::Parser)]
#[command(name = "hmac")]
#[command(about = "Keyed HMAC of the input")]
pub struct HmacApp {
    #[clap(flatten)]
    pub input: InputArgs,

    /// Secret key
    #[arg(short, long, env = "TEXTKIT_HMAC_KEY", hide_env_values = true)]
    pub key: String,

    /// Digest algorithm
    #[arg(short, long, env = "TEXTKIT_HASH_ALGORITHM", default_value = "sha256")]
    pub algorithm: HashAlgorithm,
}

pub fn run_hash(app: HashApp, global: crate::Global) -> Result<()> {
    let text = read_input(&app.input)?;

    if app.all {
        let digests = hash::hash_all(&text);
        if global.json {
            return output_json("hash", &digests);
        }
        output_digests(&digests);
        return Ok(());
    }

    if global.verbose {
        eprintln!("Hashing {} bytes with {}", text.len(), app.algorithm);
    }

    output_text(&global, "hash", &hash::hash(&text, app.algorithm))
}

pub fn run_hmac(app: HmacApp, global: crate::Global) -> Result<()> {
    let text = read_input(&app.input)?;
    let mac = hash::hmac(&text, &app.key, app.algorithm)?;
    output_text(&global, "hmac", &mac)
}

fn output_digests(digests: &[HashOutput]) {
    if is_tty() {
        banner("Digests");
    }

    let mut table = new_table();
    table.set_titles(prettytable::row!["Algorithm", "Digest"]);
    for output in digests {
        table.add_row(prettytable::row![output.algorithm, output.digest]);
    }
    table.printstd();
}
