//! Sentence encoder (BERT + tokenizer).
//!
//! Use [`EncoderConfig::stub`] for tests and dry runs without model files.

/// Encoder configuration.
pub mod config;

#[cfg(test)]
mod tests;

pub use config::EncoderConfig;

use candle_core::{Device, Tensor};
use tokenizers::{Encoding, Tokenizer};
use tracing::{debug, info, warn};

use crate::embedding::bert::SentenceBert;
use crate::embedding::device::select_device;
use crate::embedding::error::EmbeddingError;
use crate::embedding::utils::load_batch_tokenizer;
use crate::embedding::vector::Embedding;

enum EncoderBackend {
    Model {
        model: SentenceBert,
        tokenizer: Tokenizer,
        device: Device,
    },
    Stub,
}

/// Maps sentences to unit-normalized embeddings (supports stub mode).
pub struct SentenceEncoder {
    backend: EncoderBackend,
    config: EncoderConfig,
    embedding_dim: usize,
}

impl std::fmt::Debug for SentenceEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentenceEncoder")
            .field(
                "backend",
                &match &self.backend {
                    EncoderBackend::Model { device, .. } => format!("Model({:?})", device),
                    EncoderBackend::Stub => "Stub".to_string(),
                },
            )
            .field("embedding_dim", &self.embedding_dim)
            .field("max_seq_len", &self.config.max_seq_len)
            .finish()
    }
}

impl SentenceEncoder {
    /// Loads the encoder from a config (stub mode is supported).
    pub fn load(config: EncoderConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        if config.testing_stub {
            warn!("Sentence encoder running in STUB mode (testing only)");
            let embedding_dim = config.stub_dim;
            return Ok(Self {
                backend: EncoderBackend::Stub,
                config,
                embedding_dim,
            });
        }

        for required in [
            config.config_file(),
            config.weights_file(),
            config.tokenizer_file(),
        ] {
            if !required.is_file() {
                return Err(EmbeddingError::ModelLoadFailed {
                    reason: format!("Missing {}", required.display()),
                });
            }
        }

        let device = select_device();
        debug!(?device, "Selected compute device for sentence encoder");

        let model = SentenceBert::load(&config.model_path, &device).map_err(|e| {
            EmbeddingError::ModelLoadFailed {
                reason: format!("Failed to load BERT model: {}", e),
            }
        })?;

        let tokenizer = load_batch_tokenizer(&config.model_path, config.max_seq_len).map_err(
            |e| EmbeddingError::TokenizationFailed {
                reason: format!("Failed to load tokenizer: {}", e),
            },
        )?;

        let embedding_dim = model.hidden_size();

        info!(
            model_path = %config.model_path.display(),
            embedding_dim,
            max_seq_len = config.max_seq_len,
            "Sentence encoder loaded"
        );

        Ok(Self {
            backend: EncoderBackend::Model {
                model,
                tokenizer,
                device,
            },
            config,
            embedding_dim,
        })
    }

    /// Loads a stub encoder.
    pub fn stub() -> Result<Self, EmbeddingError> {
        Self::load(EncoderConfig::stub())
    }

    /// Encodes `sentences` in batches of `batch_size`, one unit vector per sentence,
    /// in input order.
    pub fn encode(
        &self,
        sentences: &[&str],
        batch_size: usize,
    ) -> Result<Vec<Embedding>, EmbeddingError> {
        if batch_size == 0 {
            return Err(EmbeddingError::InvalidInput {
                reason: "batch_size must be at least 1".to_string(),
            });
        }

        if sentences.is_empty() {
            return Ok(vec![]);
        }

        let mut embeddings = Vec::with_capacity(sentences.len());
        for (batch_idx, batch) in sentences.chunks(batch_size).enumerate() {
            debug!(
                batch = batch_idx,
                batch_len = batch.len(),
                "Encoding batch"
            );

            let encoded = match &self.backend {
                EncoderBackend::Model {
                    model,
                    tokenizer,
                    device,
                } => self.encode_batch_with_model(batch, model, tokenizer, device)?,
                EncoderBackend::Stub => batch.iter().map(|s| self.encode_stub(s)).collect(),
            };
            embeddings.extend(encoded);
        }

        Ok(embeddings)
    }

    /// Row-wise cosine similarity of two equally long embedding lists.
    pub fn similarity_pairwise(
        left: &[Embedding],
        right: &[Embedding],
    ) -> Result<Vec<f32>, EmbeddingError> {
        if left.len() != right.len() {
            return Err(EmbeddingError::InvalidInput {
                reason: format!(
                    "pairwise similarity needs equal lengths, got {} and {}",
                    left.len(),
                    right.len()
                ),
            });
        }

        Ok(left.iter().zip(right).map(|(a, b)| a.cosine(b)).collect())
    }

    fn encode_batch_with_model(
        &self,
        batch: &[&str],
        model: &SentenceBert,
        tokenizer: &Tokenizer,
        device: &Device,
    ) -> Result<Vec<Embedding>, EmbeddingError> {
        let encodings = tokenizer.encode_batch(batch.to_vec(), true).map_err(|e| {
            EmbeddingError::TokenizationFailed {
                reason: e.to_string(),
            }
        })?;

        let input_ids = stack_rows(&encodings, Encoding::get_ids, device)?;
        let token_type_ids = stack_rows(&encodings, Encoding::get_type_ids, device)?;
        let attention_mask = stack_rows(&encodings, Encoding::get_attention_mask, device)?;

        let pooled = model
            .forward_pooled(&input_ids, &token_type_ids, &attention_mask)
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("Transformer forward pass failed: {}", e),
            })?;

        let rows = pooled.to_vec2::<f32>()?;
        Ok(rows.into_iter().map(Embedding::normalized).collect())
    }

    fn encode_stub(&self, text: &str) -> Embedding {
        let mut bytes = vec![0u8; self.embedding_dim * 4];
        blake3::Hasher::new()
            .update(text.as_bytes())
            .finalize_xof()
            .fill(&mut bytes);

        let values = bytes
            .chunks_exact(4)
            .map(|chunk| {
                let raw = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                (raw as f32 / u32::MAX as f32) * 2.0 - 1.0
            })
            .collect();

        Embedding::normalized(values)
    }

    /// Returns the output embedding dimension.
    pub fn embedding_dim(&self) -> usize {
        self.embedding_dim
    }

    /// Returns `true` if running in stub mode.
    pub fn is_stub(&self) -> bool {
        matches!(self.backend, EncoderBackend::Stub)
    }

    /// Returns the encoder configuration.
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }
}

fn stack_rows(
    encodings: &[Encoding],
    field: fn(&Encoding) -> &[u32],
    device: &Device,
) -> Result<Tensor, EmbeddingError> {
    let rows = encodings
        .iter()
        .map(|encoding| Tensor::new(field(encoding), device))
        .collect::<candle_core::Result<Vec<_>>>()?;
    Ok(Tensor::stack(&rows, 0)?)
}
