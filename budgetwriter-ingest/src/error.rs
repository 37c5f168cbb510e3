use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while reading provider CSV exports.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The provider name does not match any known CSV layout.
    #[error("CSVs from '{0}' are not yet supported")]
    UnsupportedProvider(String),

    /// A date cell did not match the provider's date format.
    #[error("{provider}: invalid date '{value}' on line {line}")]
    DateParse {
        provider: &'static str,
        line: u64,
        value: String,
    },

    /// An amount cell the inclusion rule compares numerically was not a number.
    #[error("{provider}: invalid amount '{value}' on line {line}")]
    NumberParse {
        provider: &'static str,
        line: u64,
        value: String,
    },

    /// A non-empty row is too short for the provider's layout.
    #[error("{provider}: line {line} has no column {column}")]
    MissingColumn {
        provider: &'static str,
        line: u64,
        column: usize,
    },

    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
