//! Table parsing error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a sentence-pair table.
#[derive(Debug, Error)]
pub enum TableError {
    /// Input file could not be opened.
    #[error("failed to open input {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required column is absent from the header row.
    #[error("missing required column '{column}'")]
    MissingColumn { column: &'static str },

    /// The input is not well-formed CSV (ragged records, invalid UTF-8, I/O failure).
    #[error("malformed CSV input: {0}")]
    Csv(#[from] csv::Error),
}
