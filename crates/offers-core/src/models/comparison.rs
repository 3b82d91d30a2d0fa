use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::verdict::Verdict;

/// One row of a two-column comparison: spec name, both display values, verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComparisonRow {
    pub name: String,
    pub value_a: String,
    pub value_b: String,
    pub verdict: Verdict,
}

/// Everything the rendering layer needs for the side-by-side view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComparisonTable {
    pub title_a: String,
    pub title_b: String,
    /// Rating row first (when enabled), then one row per union key.
    pub rows: Vec<ComparisonRow>,
    pub affiliate_link_a: String,
    pub affiliate_link_b: String,
}

impl ComparisonTable {
    /// Number of rows won by each side, as `(a, b)`.
    pub fn wins(&self) -> (usize, usize) {
        self.rows.iter().fold((0, 0), |(a, b), row| match row.verdict {
            Verdict::BetterA => (a + 1, b),
            Verdict::BetterB => (a, b + 1),
            Verdict::Equal | Verdict::Incomparable => (a, b),
        })
    }
}
