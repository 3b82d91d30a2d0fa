use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::PolarityRule;

/// Comparator engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparatorConfig {
    /// Text shown (and treated as "absent") when a product lacks a spec.
    pub missing_placeholder: String,
    /// Label of the synthetic overall-rating row.
    pub rating_label: String,
    /// Emit the rating row ahead of the spec rows.
    pub include_rating_row: bool,
    /// Ordered polarity rule table. Empty means the built-in table.
    pub rules: Vec<PolarityRule>,
}

impl ComparatorConfig {
    /// The rule table the engine should evaluate.
    pub fn effective_rules(&self) -> Vec<PolarityRule> {
        if self.rules.is_empty() {
            PolarityRule::default_table()
        } else {
            self.rules.clone()
        }
    }
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        Self {
            missing_placeholder: defaults::DEFAULT_MISSING_PLACEHOLDER.to_string(),
            rating_label: defaults::DEFAULT_RATING_LABEL.to_string(),
            include_rating_row: defaults::DEFAULT_INCLUDE_RATING_ROW,
            rules: Vec::new(),
        }
    }
}
