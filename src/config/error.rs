//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `STS_SCORER` named an unknown scorer.
    #[error("unknown scorer '{value}': expected one of embedding, finetuned, lexical")]
    UnknownScorer { value: String },

    /// Batch size string could not be parsed as a number.
    #[error("failed to parse batch size '{value}': {source}")]
    BatchSizeParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Batch size parsed but is zero.
    #[error("invalid batch size '{value}': must be at least 1")]
    InvalidBatchSize { value: String },

    /// Boolean flag was neither truthy nor falsy.
    #[error("invalid boolean for {name}: '{value}'")]
    InvalidFlag { name: &'static str, value: String },

    /// Specified path does not exist on the filesystem.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Path exists but is not a directory (when a directory was expected).
    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}
