//! Sentence-pair similarity submission harness.
//!
//! # Public API Surface
//!
//! ## Harness
//! - [`Harness`], [`StreamPaths`], [`PredictionWriter`] - the read-score-write cycle
//! - [`Config`], [`ConfigError`] - environment-backed configuration
//!
//! ## Scoring
//! - [`Scorer`], [`ScorerKind`], [`Prediction`], [`quantize`] - the scorer contract
//! - [`LexicalScorer`] - bag-of-words Jaccard, no model
//! - [`EmbeddingScorer`], [`EmbeddingStrategy`] - sentence-embedding cosine
//!
//! ## Embedding
//! - [`SentenceEncoder`], [`EncoderConfig`], [`Embedding`] - model or stub encoder
//!
//! ## Input
//! - [`SentencePairTable`], [`SentencePair`] - the CSV input table

pub mod config;
pub mod constants;
pub mod embedding;
pub mod harness;
pub mod preview;
pub mod scoring;
pub mod table;

pub use config::{Config, ConfigError};
pub use embedding::{Embedding, EmbeddingError, EncoderConfig, SentenceEncoder};
pub use harness::{Harness, HarnessError, PredictionWriter, RunSummary, StreamPaths};
pub use scoring::{
    EmbeddingScorer, EmbeddingStrategy, LexicalScorer, Prediction, Predictions, Scorer,
    ScorerKind, ScoringError, quantize,
};
pub use table::{SentencePair, SentencePairTable, TableError};
