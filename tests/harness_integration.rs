//! Integration tests for the end-to-end harness.

mod common;

use common::fixtures::{HEADER, read_predictions, with_env_vars, write_pairs_csv};
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

use sts_eval::{Config, Harness, HarnessError, ScorerKind, TableError};

fn run_from_env() -> Result<sts_eval::RunSummary, HarnessError> {
    let config = Config::from_env().unwrap();
    config.validate().unwrap();
    Harness::from_config(&config)?.run()
}

#[test]
#[serial]
fn test_stream_directory_lexical() {
    let temp_dir = TempDir::new().unwrap();
    write_pairs_csv(
        &temp_dir.path().join("in"),
        &[("I feel sad", "I feel sad"), ("I feel happy", "I feel sad")],
    );
    let dir = temp_dir.path().to_str().unwrap();

    let summary = with_env_vars(&[("DOXA_STREAMS", dir), ("STS_SCORER", "lexical")], || {
        run_from_env().unwrap()
    });

    assert_eq!(summary.rows, 2);
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("out")).unwrap(),
        "OK\n100\n50\n"
    );
}

#[test]
#[serial]
fn test_stream_directory_stub_embedder() {
    let temp_dir = TempDir::new().unwrap();
    write_pairs_csv(
        &temp_dir.path().join("in"),
        &[
            ("A man is playing a guitar.", "A man is playing a guitar."),
            ("A man is playing a guitar.", "A woman is slicing onions."),
            ("", ""),
        ],
    );
    let dir = temp_dir.path().to_str().unwrap();

    for scorer in ["embedding", "finetuned"] {
        let vars = [
            ("DOXA_STREAMS", dir),
            ("STS_SCORER", scorer),
            ("STS_STUB_EMBEDDER", "true"),
        ];
        with_env_vars(&vars, || run_from_env().unwrap());

        let predictions = read_predictions(&temp_dir.path().join("out"));
        assert_eq!(predictions.len(), 3);
        assert_eq!(predictions[0], 100);
        assert_eq!(predictions[2], 100);
        assert!(predictions[1] <= 100);
    }
}

#[test]
#[serial]
fn test_local_default_paths() {
    let temp_dir = TempDir::new().unwrap();
    write_pairs_csv(
        &temp_dir.path().join("train.csv"),
        &[("red apple", "blue sky"), ("one two three", "one two")],
    );

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(temp_dir.path()).unwrap();
    let result = with_env_vars(&[("STS_SCORER", "lexical")], run_from_env);
    std::env::set_current_dir(previous).unwrap();

    assert_eq!(result.unwrap().predictions, 2);
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("predictions.csv")).unwrap(),
        "OK\n0\n66\n"
    );
}

#[test]
#[serial]
fn test_extra_columns_and_quoting() {
    let temp_dir = TempDir::new().unwrap();
    let csv = format!(
        "id,{HEADER},label\n\
         1,\"Hello, world\",\"hello WORLD\",5.0\n\
         2,\"She said \"\"no\"\"\",she said yes,1.2\n\
         3,\"multi\nline\",line,0.4\n"
    );
    fs::write(temp_dir.path().join("in"), csv).unwrap();

    let config = Config {
        stream_directory: Some(temp_dir.path().to_path_buf()),
        scorer: ScorerKind::Lexical,
        ..Default::default()
    };
    Harness::from_config(&config).unwrap().run().unwrap();

    assert_eq!(
        read_predictions(&temp_dir.path().join("out")),
        vec![100, 50, 50]
    );
}

#[test]
#[serial]
fn test_many_rows_keep_order() {
    let temp_dir = TempDir::new().unwrap();
    let rows: Vec<(String, String)> = (0..250)
        .map(|i| {
            if i % 2 == 0 {
                ("same words".to_string(), "same words".to_string())
            } else {
                ("left side".to_string(), "right half".to_string())
            }
        })
        .collect();
    let pairs: Vec<(&str, &str)> = rows
        .iter()
        .map(|(left, right)| (left.as_str(), right.as_str()))
        .collect();
    write_pairs_csv(&temp_dir.path().join("in"), &pairs);

    let config = Config {
        stream_directory: Some(temp_dir.path().to_path_buf()),
        scorer: ScorerKind::Lexical,
        ..Default::default()
    };
    let summary = Harness::from_config(&config).unwrap().run().unwrap();
    assert_eq!(summary.predictions, 250);

    let predictions = read_predictions(&temp_dir.path().join("out"));
    for (i, prediction) in predictions.iter().enumerate() {
        let expected = if i % 2 == 0 { 100 } else { 0 };
        assert_eq!(*prediction, expected, "row {i}");
    }
}

#[test]
#[serial]
fn test_missing_column_leaves_only_marker() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("in"), "sentence_1,other\nhello,world\n").unwrap();

    let config = Config {
        stream_directory: Some(temp_dir.path().to_path_buf()),
        scorer: ScorerKind::Lexical,
        ..Default::default()
    };
    let result = Harness::from_config(&config).unwrap().run();

    assert!(matches!(
        result,
        Err(HarnessError::Table(TableError::MissingColumn {
            column: "sentence_2"
        }))
    ));
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("out")).unwrap(),
        "OK\n"
    );
}

#[test]
#[serial]
fn test_missing_stream_directory_fails_validation() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope");
    let missing = missing.to_str().unwrap();

    let result = with_env_vars(
        &[("DOXA_STREAMS", missing), ("STS_SCORER", "lexical")],
        || Config::from_env().unwrap().validate(),
    );
    assert!(result.is_err());
}
