//! Sentence-embedding cosine scorer.

use std::collections::HashMap;

use tracing::debug;

use crate::embedding::SentenceEncoder;
use crate::table::SentencePairTable;

use super::error::ScoringError;
use super::scorer::{Predictions, Scorer};
use super::types::quantize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How sentences are fed to the encoder.
pub enum EmbeddingStrategy {
    /// Encode the `sentence_1` and `sentence_2` columns independently, in full.
    PerColumn,
    /// Encode each distinct sentence once and look rows up by text.
    Deduplicate,
}

/// Scores each row by the cosine similarity of its two sentence embeddings.
#[derive(Debug)]
pub struct EmbeddingScorer {
    encoder: SentenceEncoder,
    strategy: EmbeddingStrategy,
    batch_size: usize,
}

impl EmbeddingScorer {
    pub fn new(encoder: SentenceEncoder, strategy: EmbeddingStrategy, batch_size: usize) -> Self {
        Self {
            encoder,
            strategy,
            batch_size,
        }
    }

    pub fn strategy(&self) -> EmbeddingStrategy {
        self.strategy
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn encoder(&self) -> &SentenceEncoder {
        &self.encoder
    }

    /// Raw cosine similarity per row, in row order.
    pub fn similarities(&self, table: &SentencePairTable) -> Result<Vec<f32>, ScoringError> {
        match self.strategy {
            EmbeddingStrategy::PerColumn => self.similarities_per_column(table),
            EmbeddingStrategy::Deduplicate => self.similarities_deduplicated(table),
        }
    }

    fn similarities_per_column(
        &self,
        table: &SentencePairTable,
    ) -> Result<Vec<f32>, ScoringError> {
        let left = self.encoder.encode(&table.sentences_1(), self.batch_size)?;
        let right = self.encoder.encode(&table.sentences_2(), self.batch_size)?;

        debug!(rows = table.len(), "Encoded sentence columns");

        Ok(SentenceEncoder::similarity_pairwise(&left, &right)?)
    }

    fn similarities_deduplicated(
        &self,
        table: &SentencePairTable,
    ) -> Result<Vec<f32>, ScoringError> {
        let sentences = table.distinct_sentences();
        let embeddings = self.encoder.encode(&sentences, self.batch_size)?;

        if embeddings.len() != sentences.len() {
            return Err(ScoringError::InvalidInput {
                reason: format!(
                    "encoder returned {} embeddings for {} sentences",
                    embeddings.len(),
                    sentences.len()
                ),
            });
        }

        debug!(
            rows = table.len(),
            distinct_sentences = sentences.len(),
            "Encoded distinct sentences"
        );

        let lookup: HashMap<&str, usize> = sentences
            .iter()
            .enumerate()
            .map(|(idx, sentence)| (*sentence, idx))
            .collect();

        Ok(table
            .iter()
            .map(|row| {
                let left = &embeddings[lookup[row.sentence_1.as_str()]];
                let right = &embeddings[lookup[row.sentence_2.as_str()]];
                left.cosine(right)
            })
            .collect())
    }
}

impl Scorer for EmbeddingScorer {
    fn name(&self) -> &'static str {
        match self.strategy {
            EmbeddingStrategy::PerColumn => "embedding",
            EmbeddingStrategy::Deduplicate => "finetuned",
        }
    }

    fn predict<'a>(
        &'a self,
        table: &'a SentencePairTable,
    ) -> Result<Predictions<'a>, ScoringError> {
        let similarities = self.similarities(table)?;
        Ok(Box::new(
            similarities
                .into_iter()
                .map(|similarity| quantize(f64::from(similarity))),
        ))
    }
}
