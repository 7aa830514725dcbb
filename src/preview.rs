//! Side-by-side preview of predictions for a small table.

use crate::scoring::{Scorer, ScoringError};
use crate::table::SentencePairTable;

/// The two-row table used for quick local checks.
pub fn sample_table() -> SentencePairTable {
    SentencePairTable::from_pairs([
        ("I feel sad", "I feel sad"),
        ("I feel happy", "I feel sad"),
    ])
}

/// One line per row: index (4 wide), both sentences (24 wide), then the prediction.
pub fn render_preview(
    scorer: &dyn Scorer,
    table: &SentencePairTable,
) -> Result<String, ScoringError> {
    let mut rendered = String::new();
    for (i, (row, prediction)) in table.iter().zip(scorer.predict(table)?).enumerate() {
        rendered.push_str(&format!(
            "{:<4} {:<24} {:<24} {}\n",
            i, row.sentence_1, row.sentence_2, prediction
        ));
    }
    Ok(rendered)
}
