//! Environment-backed configuration.
//!
//! The platform only ever sets `DOXA_STREAMS`; everything else has a default and can be
//! overridden with `STS_*` environment variables for local runs.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_BATCH_SIZE, DEFAULT_MODEL_DIR, FINETUNED_BATCH_SIZE, STREAM_DIR_ENV,
};
use crate::harness::StreamPaths;
use crate::scoring::ScorerKind;

/// Harness and scorer configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read overrides on top of defaults. The harness only
/// sees the resolved values, never the environment.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Platform stream directory. When `None`, local default file names are used.
    pub stream_directory: Option<PathBuf>,

    /// Which scorer to compose. Default: [`ScorerKind::Embedding`].
    pub scorer: ScorerKind,

    /// Sentence-embedding model directory. Default: `model/` next to the executable.
    pub model_path: Option<PathBuf>,

    /// Encoder batch size hint. Default depends on [`Config::scorer`].
    pub batch_size: Option<usize>,

    /// Use the deterministic stub encoder instead of loading a model.
    pub stub_embedder: bool,
}

impl Config {
    const ENV_SCORER: &'static str = "STS_SCORER";
    const ENV_MODEL_PATH: &'static str = "STS_MODEL_PATH";
    const ENV_BATCH_SIZE: &'static str = "STS_BATCH_SIZE";
    const ENV_STUB_EMBEDDER: &'static str = "STS_STUB_EMBEDDER";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let stream_directory = Self::parse_optional_path_from_env(STREAM_DIR_ENV);
        let scorer = Self::parse_scorer_from_env(defaults.scorer)?;
        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);
        let batch_size = Self::parse_batch_size_from_env()?;
        let stub_embedder =
            Self::parse_flag_from_env(Self::ENV_STUB_EMBEDDER, defaults.stub_embedder)?;

        Ok(Self {
            stream_directory,
            scorer,
            model_path,
            batch_size,
            stub_embedder,
        })
    }

    /// Validates explicitly configured paths (does not create directories).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.stream_directory {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        if self.scorer.needs_model() && !self.stub_embedder {
            if let Some(ref path) = self.model_path {
                if !path.exists() {
                    return Err(ConfigError::PathNotFound { path: path.clone() });
                }
                if !path.is_dir() {
                    return Err(ConfigError::NotADirectory { path: path.clone() });
                }
            }
        }

        Ok(())
    }

    /// Input and output paths for this run.
    pub fn stream_paths(&self) -> StreamPaths {
        StreamPaths::resolve(self.stream_directory.as_deref())
    }

    /// Model directory to load: the configured path, else `model/` beside the executable.
    pub fn resolved_model_path(&self) -> PathBuf {
        if let Some(ref path) = self.model_path {
            return path.clone();
        }

        env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_MODEL_DIR)))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_DIR))
    }

    /// Batch size hint: the configured value, else the scorer's default.
    pub fn effective_batch_size(&self) -> usize {
        self.batch_size.unwrap_or(match self.scorer {
            ScorerKind::Finetuned => FINETUNED_BATCH_SIZE,
            ScorerKind::Embedding | ScorerKind::Lexical => DEFAULT_BATCH_SIZE,
        })
    }

    fn parse_scorer_from_env(default: ScorerKind) -> Result<ScorerKind, ConfigError> {
        match Self::parse_optional_string_from_env(Self::ENV_SCORER) {
            Some(value) => value.parse(),
            None => Ok(default),
        }
    }

    fn parse_batch_size_from_env() -> Result<Option<usize>, ConfigError> {
        let Some(value) = Self::parse_optional_string_from_env(Self::ENV_BATCH_SIZE) else {
            return Ok(None);
        };

        let size: usize = value
            .parse()
            .map_err(|e| ConfigError::BatchSizeParseError {
                value: value.clone(),
                source: e,
            })?;

        if size == 0 {
            return Err(ConfigError::InvalidBatchSize { value });
        }

        Ok(Some(size))
    }

    fn parse_flag_from_env(name: &'static str, default: bool) -> Result<bool, ConfigError> {
        let Some(value) = Self::parse_optional_string_from_env(name) else {
            return Ok(default);
        };

        match value.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidFlag { name, value }),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        Self::parse_optional_string_from_env(var_name).map(PathBuf::from)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}
