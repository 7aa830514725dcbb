//! Harness error types.

use std::path::PathBuf;
use thiserror::Error;

use crate::scoring::ScoringError;
use crate::table::TableError;

/// Errors that abort a run. Nothing is retried; output already flushed stays.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Output file could not be created.
    #[error("failed to open output {path}: {source}")]
    OpenOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing or flushing a line failed.
    #[error("failed to write output: {0}")]
    Write(#[source] std::io::Error),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Scoring(#[from] ScoringError),

    /// The scorer yielded a different number of predictions than there are rows.
    #[error("scorer yielded {actual} predictions for {expected} rows")]
    PredictionCountMismatch { expected: usize, actual: usize },
}
