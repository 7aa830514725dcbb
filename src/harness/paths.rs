use std::path::{Path, PathBuf};

use crate::constants::{
    LOCAL_INPUT_FILE, LOCAL_OUTPUT_FILE, STREAM_INPUT_FILE, STREAM_OUTPUT_FILE,
};

/// Resolved input and output locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamPaths {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl StreamPaths {
    /// `<dir>/in` and `<dir>/out` inside a stream directory, else `train.csv` and
    /// `predictions.csv` in the working directory.
    pub fn resolve(stream_directory: Option<&Path>) -> Self {
        match stream_directory {
            Some(dir) => Self {
                input: dir.join(STREAM_INPUT_FILE),
                output: dir.join(STREAM_OUTPUT_FILE),
            },
            None => Self {
                input: PathBuf::from(LOCAL_INPUT_FILE),
                output: PathBuf::from(LOCAL_OUTPUT_FILE),
            },
        }
    }
}
