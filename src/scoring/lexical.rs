//! Bag-of-words Jaccard scorer.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::table::SentencePairTable;

use super::error::ScoringError;
use super::scorer::{Predictions, Scorer};
use super::types::Prediction;

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[a-z']+").expect("token regex must compile"));

/// Lowercases `text` and extracts maximal runs of letters and apostrophes.
pub fn tokenize(text: &str) -> Vec<String> {
    TOKEN_PATTERN
        .find_iter(&text.to_lowercase())
        .map(|token| token.as_str().to_string())
        .collect()
}

/// Unique tokens of `text`; order and repetition are discarded.
pub fn bag_of_words(text: &str) -> HashSet<String> {
    tokenize(text).into_iter().collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JaccardScore {
    pub intersection: usize,
    pub union: usize,
}

impl JaccardScore {
    /// `intersection / union`, or 0 when nothing is shared (two empty bags included).
    pub fn similarity(&self) -> f64 {
        if self.intersection == 0 {
            return 0.0;
        }
        self.intersection as f64 / self.union as f64
    }

    /// Truncated `100 * intersection / union`, or 0 when nothing is shared.
    pub fn prediction(&self) -> Prediction {
        if self.intersection == 0 {
            return Prediction::MIN;
        }
        Prediction::from_ratio(self.intersection, self.union)
    }
}

pub fn jaccard_score(left: &HashSet<String>, right: &HashSet<String>) -> JaccardScore {
    let intersection = left.intersection(right).count();
    let union = left.len() + right.len() - intersection;
    JaccardScore {
        intersection,
        union,
    }
}

/// Jaccard similarity over bags of words; needs no model.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalScorer;

impl LexicalScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Scorer for LexicalScorer {
    fn name(&self) -> &'static str {
        "lexical"
    }

    fn predict<'a>(
        &'a self,
        table: &'a SentencePairTable,
    ) -> Result<Predictions<'a>, ScoringError> {
        let bags: HashMap<&str, HashSet<String>> = table
            .distinct_sentences()
            .into_iter()
            .map(|sentence| (sentence, bag_of_words(sentence)))
            .collect();

        debug!(
            rows = table.len(),
            distinct_sentences = bags.len(),
            "Built bags of words"
        );

        // Every row sentence is a key of `bags`.
        Ok(Box::new(table.iter().map(move |row| {
            jaccard_score(
                &bags[row.sentence_1.as_str()],
                &bags[row.sentence_2.as_str()],
            )
            .prediction()
        })))
    }
}
