#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("No input provided. Pass it as an argument, with --file, or pipe it on stdin")]
    MissingInput,

    #[error("Failed to read {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read stdin: {0}")]
    ReadStdin(#[source] std::io::Error),
}
