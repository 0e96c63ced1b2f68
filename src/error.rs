// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// No row starts with the header marker; nothing is written.
    #[error("Could not find header row starting with '{marker}'")]
    HeaderNotFound { marker: String },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("Invalid season pattern: {0}")]
    SeasonPattern(String),
}

impl ConvertError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Io { path: path.into(), source }
    }

    pub fn is_header_not_found(&self) -> bool {
        matches!(self, ConvertError::HeaderNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
