//! Ordered polarity rule table.
//!
//! Rules are evaluated top to bottom against the folded spec name and the
//! first match decides the polarity. The precedence between rules is therefore
//! the order of the table, not the order of `if` statements.
//!
//! Folding lowercases and strips diacritics, so "Latência" meets the
//! `latencia` token and "Espessura" meets `espessura`.

use std::cmp::Ordering;

use offers_core::constants::FALLBACK_RULE_NAME;
use offers_core::models::{Polarity, PolarityRule, Verdict};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Polarity chosen for a spec name, and the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub polarity: Polarity,
    /// `None` when no rule matched and the fallback applied.
    pub rule: Option<&'a str>,
}

impl Resolution<'_> {
    pub fn rule_name(&self) -> &str {
        self.rule.unwrap_or(FALLBACK_RULE_NAME)
    }
}

/// Evaluates polarity rules first-match-wins, falling back to higher-is-better.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<PolarityRule>,
}

impl RuleTable {
    /// Build a table; rule tokens are folded the same way spec names are.
    pub fn new(rules: Vec<PolarityRule>) -> Self {
        let rules = rules
            .into_iter()
            .map(|mut rule| {
                rule.tokens = rule.tokens.iter().map(|t| fold_name(t)).collect();
                rule
            })
            .collect();
        Self { rules }
    }

    pub fn rules(&self) -> &[PolarityRule] {
        &self.rules
    }

    /// Resolve the polarity for a spec name (case- and accent-insensitive
    /// substring match).
    pub fn resolve(&self, name: &str) -> Resolution<'_> {
        let folded = fold_name(name);
        self.rules
            .iter()
            .find(|rule| rule.matches(&folded))
            .map(|rule| Resolution {
                polarity: rule.polarity,
                rule: Some(rule.name.as_str()),
            })
            .unwrap_or(Resolution {
                polarity: Polarity::HigherIsBetter,
                rule: None,
            })
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new(PolarityRule::default_table())
    }
}

/// Lowercase and strip combining marks (NFD decomposition).
pub fn fold_name(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Apply a polarity to two magnitudes. Equal magnitudes are `Equal`;
/// unordered (NaN) magnitudes are `Incomparable`.
pub fn apply(polarity: Polarity, a: f64, b: f64) -> Verdict {
    match (a.partial_cmp(&b), polarity) {
        (None, _) => Verdict::Incomparable,
        (Some(Ordering::Equal), _) => Verdict::Equal,
        (Some(Ordering::Greater), Polarity::HigherIsBetter)
        | (Some(Ordering::Less), Polarity::LowerIsBetter) => Verdict::BetterA,
        (Some(Ordering::Less), Polarity::HigherIsBetter)
        | (Some(Ordering::Greater), Polarity::LowerIsBetter) => Verdict::BetterB,
    }
}
