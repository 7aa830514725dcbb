use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;
use crate::constants::{MAX_PREDICTION, MIN_PREDICTION, QUANTIZE_TOLERANCE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Similarity prediction on the integer 0-100 scale.
pub struct Prediction(u8);

impl Prediction {
    pub const MIN: Prediction = Prediction(MIN_PREDICTION);
    pub const MAX: Prediction = Prediction(MAX_PREDICTION);

    /// Returns `None` for values above 100.
    pub fn new(value: u8) -> Option<Self> {
        (value <= MAX_PREDICTION).then_some(Self(value))
    }

    /// Truncated `100 * numerator / denominator` in exact integer arithmetic.
    ///
    /// A zero denominator yields [`Prediction::MIN`].
    pub fn from_ratio(numerator: usize, denominator: usize) -> Self {
        if denominator == 0 {
            return Self::MIN;
        }
        let scaled = (100 * numerator) / denominator;
        Self(scaled.min(MAX_PREDICTION as usize) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maps a similarity to a prediction: `clamp(trunc(100 * similarity), 0, 100)`.
///
/// Truncates rather than rounds, so 0.999 maps to 99. Non-finite input maps to 0.
pub fn quantize(similarity: f64) -> Prediction {
    if !similarity.is_finite() {
        return Prediction::MIN;
    }

    let scaled = (100.0 * similarity + QUANTIZE_TOLERANCE).trunc();
    Prediction(scaled.clamp(MIN_PREDICTION as f64, MAX_PREDICTION as f64) as u8)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Scorer implementations selectable at composition time.
pub enum ScorerKind {
    /// Pretrained sentence embeddings, columns encoded independently.
    #[default]
    Embedding,
    /// Fine-tuned checkpoint, distinct sentences encoded once.
    Finetuned,
    /// Bag-of-words Jaccard overlap; no model.
    Lexical,
}

impl ScorerKind {
    /// Returns `true` if this scorer loads a sentence-embedding model.
    pub fn needs_model(&self) -> bool {
        matches!(self, ScorerKind::Embedding | ScorerKind::Finetuned)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScorerKind::Embedding => "embedding",
            ScorerKind::Finetuned => "finetuned",
            ScorerKind::Lexical => "lexical",
        }
    }
}

impl fmt::Display for ScorerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScorerKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "embedding" => Ok(ScorerKind::Embedding),
            "finetuned" => Ok(ScorerKind::Finetuned),
            "lexical" => Ok(ScorerKind::Lexical),
            _ => Err(ConfigError::UnknownScorer {
                value: s.to_string(),
            }),
        }
    }
}
