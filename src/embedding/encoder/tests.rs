use super::*;
use std::path::PathBuf;
use tempfile::TempDir;

mod config_tests {
    use super::*;

    #[test]
    fn test_encoder_config_default() {
        let config = EncoderConfig::default();
        assert_eq!(config.max_seq_len, 512);
        assert_eq!(config.stub_dim, 384);
        assert!(!config.testing_stub);
        assert!(config.model_path.as_os_str().is_empty());
    }

    #[test]
    fn test_encoder_config_new() {
        let config = EncoderConfig::new("/models/minilm");
        assert_eq!(config.model_path, PathBuf::from("/models/minilm"));
        assert_eq!(
            config.weights_file(),
            PathBuf::from("/models/minilm/model.safetensors")
        );
        assert_eq!(
            config.tokenizer_file(),
            PathBuf::from("/models/minilm/tokenizer.json")
        );
        assert!(!config.testing_stub);
    }

    #[test]
    fn test_encoder_config_validation_with_stub() {
        assert!(EncoderConfig::stub().validate().is_ok());
    }

    #[test]
    fn test_encoder_config_validation_empty_path_no_stub() {
        let result = EncoderConfig::default().validate();
        assert!(matches!(result, Err(EmbeddingError::InvalidConfig { .. })));
    }

    #[test]
    fn test_encoder_config_validation_missing_dir() {
        let result = EncoderConfig::new("/nonexistent/model").validate();
        assert!(matches!(result, Err(EmbeddingError::ModelNotFound { .. })));
    }

    #[test]
    fn test_encoder_config_validation_zero_stub_dim() {
        let config = EncoderConfig {
            stub_dim: 0,
            ..EncoderConfig::stub()
        };
        assert!(matches!(
            config.validate(),
            Err(EmbeddingError::InvalidConfig { .. })
        ));
    }
}

mod load_tests {
    use super::*;

    #[test]
    fn test_load_stub() {
        let encoder = SentenceEncoder::stub().expect("stub should load");
        assert!(encoder.is_stub());
        assert_eq!(encoder.embedding_dim(), 384);
    }

    #[test]
    fn test_load_missing_model_dir() {
        let result = SentenceEncoder::load(EncoderConfig::new("/nonexistent/model"));
        assert!(matches!(result, Err(EmbeddingError::ModelNotFound { .. })));
    }

    #[test]
    fn test_load_incomplete_model_dir() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.json"), "{}").unwrap();

        let result = SentenceEncoder::load(EncoderConfig::new(temp_dir.path()));
        match result {
            Err(EmbeddingError::ModelLoadFailed { reason }) => {
                assert!(reason.contains("model.safetensors"), "reason: {reason}");
            }
            other => panic!("expected ModelLoadFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_debug_shows_stub_backend() {
        let encoder = SentenceEncoder::stub().unwrap();
        let debug_str = format!("{:?}", encoder);
        assert!(debug_str.contains("SentenceEncoder"));
        assert!(debug_str.contains("Stub"));
    }
}

mod stub_tests {
    use super::*;

    fn norm(embedding: &Embedding) -> f32 {
        embedding
            .as_slice()
            .iter()
            .map(|x| x * x)
            .sum::<f32>()
            .sqrt()
    }

    #[test]
    fn test_stub_embeddings_are_unit_vectors() {
        let encoder = SentenceEncoder::stub().unwrap();
        let embeddings = encoder
            .encode(&["I feel sad", "", "café ☕", "!!!"], 32)
            .unwrap();

        assert_eq!(embeddings.len(), 4);
        for embedding in &embeddings {
            assert_eq!(embedding.dim(), 384);
            assert!((norm(embedding) - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_stub_is_deterministic_and_text_sensitive() {
        let encoder = SentenceEncoder::stub().unwrap();
        let first = encoder.encode(&["hello", "world"], 1).unwrap();
        let second = encoder.encode(&["hello", "world"], 1).unwrap();

        assert_eq!(first, second);
        assert_ne!(first[0], first[1]);
    }

    #[test]
    fn test_batch_size_does_not_change_output() {
        let encoder = SentenceEncoder::stub().unwrap();
        let sentences = ["a", "b", "c", "d", "e"];

        let one = encoder.encode(&sentences, 1).unwrap();
        let two = encoder.encode(&sentences, 2).unwrap();
        let all = encoder.encode(&sentences, 16).unwrap();

        assert_eq!(one, two);
        assert_eq!(one, all);
    }

    #[test]
    fn test_encode_empty_input() {
        let encoder = SentenceEncoder::stub().unwrap();
        assert!(encoder.encode(&[], 8).unwrap().is_empty());
    }

    #[test]
    fn test_encode_zero_batch_size() {
        let encoder = SentenceEncoder::stub().unwrap();
        let result = encoder.encode(&["x"], 0);
        assert!(matches!(result, Err(EmbeddingError::InvalidInput { .. })));
    }
}

mod similarity_tests {
    use super::*;

    #[test]
    fn test_self_similarity_is_one() {
        let encoder = SentenceEncoder::stub().unwrap();
        let embeddings = encoder.encode(&["I feel sad"], 4).unwrap();

        let scores =
            SentenceEncoder::similarity_pairwise(&embeddings, &embeddings).unwrap();
        assert!((scores[0] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_similarity_is_symmetric() {
        let encoder = SentenceEncoder::stub().unwrap();
        let left = encoder.encode(&["alpha", "beta"], 4).unwrap();
        let right = encoder.encode(&["gamma", "delta"], 4).unwrap();

        let forward = SentenceEncoder::similarity_pairwise(&left, &right).unwrap();
        let backward = SentenceEncoder::similarity_pairwise(&right, &left).unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_similarity_of_known_vectors() {
        let a = Embedding::normalized(vec![1.0, 0.0]);
        let b = Embedding::normalized(vec![1.0, 1.0]);
        let c = Embedding::normalized(vec![0.0, -3.0]);

        let scores = SentenceEncoder::similarity_pairwise(
            &[a.clone(), a.clone()],
            &[b, c],
        )
        .unwrap();

        assert!((scores[0] - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
        assert!(scores[1].abs() < 1e-6);
    }

    #[test]
    fn test_similarity_length_mismatch() {
        let a = Embedding::normalized(vec![1.0, 0.0]);
        let result = SentenceEncoder::similarity_pairwise(&[a.clone(), a.clone()], &[a]);
        assert!(matches!(result, Err(EmbeddingError::InvalidInput { .. })));
    }

    #[test]
    fn test_zero_vector_stays_zero() {
        let zero = Embedding::normalized(vec![0.0, 0.0, 0.0]);
        assert_eq!(zero.as_slice(), &[0.0, 0.0, 0.0]);
        assert_eq!(zero.cosine(&zero), 0.0);
    }
}
