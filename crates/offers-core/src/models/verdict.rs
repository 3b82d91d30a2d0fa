use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Outcome of comparing one specification row between two products.
///
/// A verdict is a pure function of (spec name, value A, value B). It carries
/// no identity and is recomputed on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Verdict {
    /// Product A has the better value.
    BetterA,
    /// Product B has the better value.
    BetterB,
    /// Both values are equal, textually or numerically.
    Equal,
    /// No winner can be decided (missing or non-numeric values).
    Incomparable,
}

impl Verdict {
    /// The verdict obtained when the two sides are swapped.
    pub fn mirrored(self) -> Self {
        match self {
            Verdict::BetterA => Verdict::BetterB,
            Verdict::BetterB => Verdict::BetterA,
            other => other,
        }
    }

    /// Whether one side was declared the winner.
    pub fn is_decided(self) -> bool {
        matches!(self, Verdict::BetterA | Verdict::BetterB)
    }
}
