use std::env;
use std::fs;
use std::path::Path;

pub const HEADER: &str = "sentence_1,sentence_2";

pub const ENV_KEYS: [&str; 5] = [
    "DOXA_STREAMS",
    "STS_SCORER",
    "STS_MODEL_PATH",
    "STS_BATCH_SIZE",
    "STS_STUB_EMBEDDER",
];

/// Writes a two-column CSV with a header row to `path`.
pub fn write_pairs_csv(path: &Path, pairs: &[(&str, &str)]) {
    let mut writer = csv::Writer::from_path(path).unwrap();
    writer.write_record(["sentence_1", "sentence_2"]).unwrap();
    for (left, right) in pairs {
        writer.write_record([*left, *right]).unwrap();
    }
    writer.flush().unwrap();
}

pub fn clear_env() {
    // SAFETY: Test code only, callers are #[serial].
    for key in ENV_KEYS {
        unsafe { env::remove_var(key) };
    }
}

pub fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    clear_env();
    // SAFETY: Test code only, callers are #[serial].
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    clear_env();
    result
}

/// Output lines after the `OK` marker, parsed as predictions.
pub fn read_predictions(path: &Path) -> Vec<u8> {
    let output = fs::read_to_string(path).unwrap();
    let mut lines = output.lines();
    assert_eq!(lines.next(), Some("OK"));
    lines.map(|line| line.parse().unwrap()).collect()
}
