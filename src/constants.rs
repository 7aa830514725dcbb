//! Cross-cutting, shared constants.
//!
//! File names and the stream-directory variable are fixed by the evaluation platform;
//! everything else is a default that [`Config`](crate::config::Config) can override.

/// Environment variable naming the platform's stream directory.
pub const STREAM_DIR_ENV: &str = "DOXA_STREAMS";

/// Input file name inside the stream directory.
pub const STREAM_INPUT_FILE: &str = "in";
/// Output file name inside the stream directory.
pub const STREAM_OUTPUT_FILE: &str = "out";

/// Input file used when no stream directory is configured.
pub const LOCAL_INPUT_FILE: &str = "train.csv";
/// Output file used when no stream directory is configured.
pub const LOCAL_OUTPUT_FILE: &str = "predictions.csv";

/// Readiness line written before any prediction.
pub const READY_MARKER: &str = "OK";

/// Required CSV column holding the first sentence of each pair.
pub const SENTENCE_1_COLUMN: &str = "sentence_1";
/// Required CSV column holding the second sentence of each pair.
pub const SENTENCE_2_COLUMN: &str = "sentence_2";

/// Directory name (next to the executable) holding the sentence-embedding model.
pub const DEFAULT_MODEL_DIR: &str = "model";

/// Encoder batch size for the base pretrained model.
pub const DEFAULT_BATCH_SIZE: usize = 32;
/// Encoder batch size for the fine-tuned checkpoint.
pub const FINETUNED_BATCH_SIZE: usize = 16;

/// Max tokens fed to the encoder per sentence.
pub const MAX_SEQ_LEN: usize = 512;

/// Dimension of stub embeddings (matches MiniLM-class sentence encoders).
pub const STUB_EMBEDDING_DIM: usize = 384;

/// Lowest prediction value.
pub const MIN_PREDICTION: u8 = 0;
/// Highest prediction value.
pub const MAX_PREDICTION: u8 = 100;

/// Tolerance added on the 0-100 scale before truncation.
///
/// Unit vectors normalized in `f32` have self-similarity a few ULPs below 1.0; this
/// keeps those at 100 while 99.5 and 99.9 still truncate to 99.
pub const QUANTIZE_TOLERANCE: f64 = 1e-4;
