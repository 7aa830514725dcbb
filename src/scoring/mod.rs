//! Sentence-pair similarity scorers.
//!
//! Every scorer implements [`Scorer`]: a table goes in, one [`Prediction`] per row comes
//! out in row order. [`ScorerKind::build`] picks the implementation at composition time.
//!
//! Both scorers quantize the same way: `clamp(trunc(100 * similarity), 0, 100)`. The
//! lexical scorer does it in exact integer arithmetic; the embedding scorer goes
//! through [`quantize`], which tolerates `f32` noise around unit self-similarity.

/// Scoring errors.
pub mod error;
/// Bag-of-words Jaccard scorer.
pub mod lexical;
/// Scorer trait and composition.
pub mod scorer;
/// Sentence-embedding scorer.
pub mod semantic;
/// Prediction and scorer-kind types.
pub mod types;


pub use error::ScoringError;
pub use lexical::{JaccardScore, LexicalScorer, bag_of_words, jaccard_score, tokenize};
pub use scorer::{Predictions, Scorer};
pub use semantic::{EmbeddingScorer, EmbeddingStrategy};
pub use types::{Prediction, ScorerKind, quantize};
