//! Polarity rules: which direction of a numeric magnitude counts as "better".
//!
//! Rules form an ordered table evaluated top to bottom; the first rule whose
//! tokens appear in the lowercased spec name wins. Names that match nothing
//! fall back to [`Polarity::HigherIsBetter`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Direction in which a larger magnitude is judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Polarity {
    /// Larger magnitude wins (Hz, GB, FPS, mAh, rating).
    HigherIsBetter,
    /// Smaller magnitude wins (latency, weight, thickness).
    LowerIsBetter,
}

/// One entry of the polarity rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PolarityRule {
    /// Stable identifier, reported in logs.
    pub name: String,
    /// Lowercase substrings; any one of them appearing in the spec name matches.
    pub tokens: Vec<String>,
    pub polarity: Polarity,
}

impl PolarityRule {
    pub fn new(name: &str, tokens: &[&str], polarity: Polarity) -> Self {
        Self {
            name: name.to_string(),
            tokens: tokens.iter().map(|t| t.to_lowercase()).collect(),
            polarity,
        }
    }

    /// Whether this rule applies to a spec name that was already folded
    /// (lowercased, diacritics stripped).
    pub fn matches(&self, folded_name: &str) -> bool {
        self.tokens
            .iter()
            .any(|token| folded_name.contains(token.as_str()))
    }

    /// The built-in rule table.
    ///
    /// Battery capacity comes first: names such as "Bateria (mAh)" would
    /// otherwise hit the lower-is-better unit tokens.
    pub fn default_table() -> Vec<PolarityRule> {
        vec![
            PolarityRule::new(
                "battery_capacity",
                &["bateria", "mah"],
                Polarity::HigherIsBetter,
            ),
            PolarityRule::new(
                "lower_is_better_units",
                &["ms", "s", "g", "kg", "mm", "cm"],
                Polarity::LowerIsBetter,
            ),
            PolarityRule::new(
                "lower_is_better_terms",
                &["tempo", "latencia", "peso", "espessura", "delay"],
                Polarity::LowerIsBetter,
            ),
        ]
    }
}
