//! Error types for the roshambo crate

use thiserror::Error;

/// Main error type for the roshambo crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move code '{code}' (expected one of 'r', 'p', 's')")]
    InvalidMoveCode { code: String },

    #[error("invalid round label '{label}' (expected two move codes, e.g. 'rp')")]
    InvalidRoundLabel { label: String },

    #[error("invalid game mode '{input}'. Expected one of: {expected}")]
    ParseGameMode { input: String, expected: String },

    #[error("invalid player kind '{input}'. Expected one of: {expected}")]
    ParsePlayerKind { input: String, expected: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
