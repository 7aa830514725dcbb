use std::io::{self, Write};

use crate::constants::READY_MARKER;
use crate::scoring::Prediction;

/// Line-oriented prediction sink. Every line is flushed before the call returns, so a
/// reader tailing the output sees a gapless, growing prefix.
#[derive(Debug)]
pub struct PredictionWriter<W: Write> {
    inner: W,
    emitted: usize,
}

impl<W: Write> PredictionWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, emitted: 0 }
    }

    /// Writes the readiness marker line.
    pub fn ready(&mut self) -> io::Result<()> {
        self.write_line(READY_MARKER)
    }

    /// Writes one prediction as a decimal line.
    pub fn emit(&mut self, prediction: Prediction) -> io::Result<()> {
        self.write_line(prediction)?;
        self.emitted += 1;
        Ok(())
    }

    /// Number of predictions written so far (the marker is not counted).
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    fn write_line(&mut self, value: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.inner, "{value}")?;
        self.inner.flush()
    }
}
