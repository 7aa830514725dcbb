use tracing::info;

use crate::config::Config;
use crate::embedding::{EncoderConfig, SentenceEncoder};
use crate::table::SentencePairTable;

use super::error::ScoringError;
use super::lexical::LexicalScorer;
use super::semantic::{EmbeddingScorer, EmbeddingStrategy};
use super::types::{Prediction, ScorerKind};

/// Single-pass, lazily produced predictions, one per table row in row order.
pub type Predictions<'a> = Box<dyn Iterator<Item = Prediction> + 'a>;

/// Maps a sentence-pair table to similarity predictions.
///
/// Setup (tokenizing, model inference) happens in `predict` and may fail; the
/// returned iterator itself is infallible and yields exactly `table.len()` items.
pub trait Scorer {
    fn name(&self) -> &'static str;

    fn predict<'a>(
        &'a self,
        table: &'a SentencePairTable,
    ) -> Result<Predictions<'a>, ScoringError>;
}

impl ScorerKind {
    /// Builds the scorer for this kind from `config`.
    pub fn build(&self, config: &Config) -> Result<Box<dyn Scorer>, ScoringError> {
        let strategy = match self {
            ScorerKind::Lexical => {
                info!(scorer = %self, "Using bag-of-words scorer");
                return Ok(Box::new(LexicalScorer::new()));
            }
            ScorerKind::Embedding => EmbeddingStrategy::PerColumn,
            ScorerKind::Finetuned => EmbeddingStrategy::Deduplicate,
        };

        let encoder_config = if config.stub_embedder {
            EncoderConfig::stub()
        } else {
            EncoderConfig::new(config.resolved_model_path())
        };
        let encoder = SentenceEncoder::load(encoder_config)?;
        let batch_size = config.effective_batch_size();

        info!(
            scorer = %self,
            ?strategy,
            batch_size,
            stub = encoder.is_stub(),
            "Using sentence-embedding scorer"
        );

        Ok(Box::new(EmbeddingScorer::new(encoder, strategy, batch_size)))
    }
}
