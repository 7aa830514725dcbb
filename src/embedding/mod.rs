//! Embedding + model utilities.
//!
//! - [`encoder`] maps sentences to unit vectors (BERT model or deterministic stub).
//! - [`vector`] holds the [`Embedding`] type and its cosine similarity.

/// BERT sentence encoder with mean pooling.
pub mod bert;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
/// Sentence encoder (batched encode + pairwise similarity).
pub mod encoder;
mod error;
/// Tokenizer loading helpers.
pub mod utils;
/// Unit-normalized embedding vectors.
pub mod vector;

pub use encoder::{EncoderConfig, SentenceEncoder};
pub use error::EmbeddingError;
pub use vector::Embedding;
