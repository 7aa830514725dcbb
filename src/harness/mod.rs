//! Evaluation harness: one read-score-write cycle per process.
//!
//! 1. Open the input (fails before anything is written if unreadable).
//! 2. Create the output and write the `OK` marker, flushed.
//! 3. Parse the CSV table.
//! 4. Stream one flushed line per prediction, in row order.

pub mod error;
pub mod paths;
pub mod writer;


pub use error::HarnessError;
pub use paths::StreamPaths;
pub use writer::PredictionWriter;

use std::fs::File;
use std::io::{BufWriter, Read, Write};

use tracing::{debug, info};

use crate::config::Config;
use crate::scoring::Scorer;
use crate::table::{SentencePairTable, TableError};

/// Counts from a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub rows: usize,
    pub predictions: usize,
}

/// Drives a [`Scorer`] over the configured input and output streams.
pub struct Harness {
    paths: StreamPaths,
    scorer: Box<dyn Scorer>,
}

impl std::fmt::Debug for Harness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Harness")
            .field("paths", &self.paths)
            .field("scorer", &self.scorer.name())
            .finish()
    }
}

impl Harness {
    pub fn new(config: &Config, scorer: Box<dyn Scorer>) -> Self {
        Self {
            paths: config.stream_paths(),
            scorer,
        }
    }

    /// Builds the scorer named by `config` and wraps it.
    pub fn from_config(config: &Config) -> Result<Self, HarnessError> {
        let scorer = config.scorer.build(config)?;
        Ok(Self::new(config, scorer))
    }

    pub fn paths(&self) -> &StreamPaths {
        &self.paths
    }

    pub fn scorer(&self) -> &dyn Scorer {
        self.scorer.as_ref()
    }

    /// Runs the full cycle against the resolved files.
    pub fn run(&self) -> Result<RunSummary, HarnessError> {
        let input = File::open(&self.paths.input).map_err(|source| TableError::Open {
            path: self.paths.input.clone(),
            source,
        })?;

        let output =
            File::create(&self.paths.output).map_err(|source| HarnessError::OpenOutput {
                path: self.paths.output.clone(),
                source,
            })?;

        info!(
            input = %self.paths.input.display(),
            output = %self.paths.output.display(),
            "Opened streams"
        );

        self.run_with(input, BufWriter::new(output))
    }

    /// Runs the full cycle over an arbitrary reader/writer pair.
    pub fn run_with<R: Read, W: Write>(
        &self,
        input: R,
        output: W,
    ) -> Result<RunSummary, HarnessError> {
        let mut writer = PredictionWriter::new(output);
        writer.ready().map_err(HarnessError::Write)?;
        debug!("Readiness marker written");

        let table = SentencePairTable::from_csv_reader(input)?;
        info!(
            rows = table.len(),
            scorer = self.scorer.name(),
            "Scoring sentence pairs"
        );

        for prediction in self.scorer.predict(&table)? {
            writer.emit(prediction).map_err(HarnessError::Write)?;
        }

        if writer.emitted() != table.len() {
            return Err(HarnessError::PredictionCountMismatch {
                expected: table.len(),
                actual: writer.emitted(),
            });
        }

        let summary = RunSummary {
            rows: table.len(),
            predictions: writer.emitted(),
        };
        info!(predictions = summary.predictions, "Run complete");
        Ok(summary)
    }
}
