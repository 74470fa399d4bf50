use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Not a readable directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Failed to list {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read {}: {source}", path.display())]
    ReadDocument {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8 text", path.display())]
    InvalidUtf8 { path: PathBuf },

    #[error("Unknown encoding: {name}")]
    UnknownEncoding { name: String },

    #[error("Failed to load tokenizer: {0}")]
    Tokenizer(String),

    #[error("Output file name must not be empty")]
    EmptyOutputName,

    #[error("No folder given (pass a folder argument or run from a terminal)")]
    MissingFolder,

    #[error("Failed to write {}: {source}", path.display())]
    WriteReport {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read input: {0}")]
    Prompt(std::io::Error),
}
