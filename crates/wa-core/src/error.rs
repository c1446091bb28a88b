use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordsError {
    #[error("Unable to read {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed frequency record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Word not found: {word}")]
    NotFound { word: String },
    #[error("Invalid length filter: {0}")]
    InvalidLength(String),
}

impl WordsError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WordsError::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, WordsError>;
