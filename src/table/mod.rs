//! Sentence-pair tables.
//!
//! A [`SentencePairTable`] is the scorer's only input: ordered rows of
//! `sentence_1`/`sentence_2`, read once from CSV and never mutated. Prediction order
//! follows row order.

pub mod error;


pub use error::TableError;

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::constants::{SENTENCE_1_COLUMN, SENTENCE_2_COLUMN};

/// One input row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SentencePair {
    pub sentence_1: String,
    pub sentence_2: String,
}

impl SentencePair {
    pub fn new(sentence_1: impl Into<String>, sentence_2: impl Into<String>) -> Self {
        Self {
            sentence_1: sentence_1.into(),
            sentence_2: sentence_2.into(),
        }
    }
}

/// Ordered, immutable sequence of sentence pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentencePairTable {
    rows: Vec<SentencePair>,
}

impl SentencePairTable {
    pub fn new(rows: Vec<SentencePair>) -> Self {
        Self { rows }
    }

    /// Builds a table from `(sentence_1, sentence_2)` tuples.
    pub fn from_pairs<I, A, B>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<String>,
        B: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(a, b)| SentencePair::new(a, b))
                .collect(),
        )
    }

    /// Parses CSV with a header row. Columns other than the two sentence columns are
    /// ignored; the sentence columns may appear in any position.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        for column in [SENTENCE_1_COLUMN, SENTENCE_2_COLUMN] {
            if !headers.iter().any(|header| header == column) {
                return Err(TableError::MissingColumn { column });
            }
        }

        let rows = csv_reader
            .deserialize::<SentencePair>()
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            rows = rows.len(),
            columns = headers.len(),
            "Parsed sentence-pair table"
        );

        Ok(Self { rows })
    }

    /// Opens `path` and parses it with [`SentencePairTable::from_csv_reader`].
    pub fn from_csv_path(path: &Path) -> Result<Self, TableError> {
        let file = File::open(path).map_err(|source| TableError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_csv_reader(file)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[SentencePair] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SentencePair> {
        self.rows.iter()
    }

    /// The `sentence_1` column in row order.
    pub fn sentences_1(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.sentence_1.as_str()).collect()
    }

    /// The `sentence_2` column in row order.
    pub fn sentences_2(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.sentence_2.as_str()).collect()
    }

    /// Every sentence appearing in either column, once, in first-seen order.
    pub fn distinct_sentences(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .flat_map(|row| [row.sentence_1.as_str(), row.sentence_2.as_str()])
            .filter(|sentence| seen.insert(*sentence))
            .collect()
    }
}

impl<'a> IntoIterator for &'a SentencePairTable {
    type Item = &'a SentencePair;
    type IntoIter = std::slice::Iter<'a, SentencePair>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
