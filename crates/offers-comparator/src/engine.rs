//! ComparatorEngine: implements ISpecComparator and drives the two-column view.
//!
//! Per row: missing check → raw-text equality → magnitude extraction →
//! polarity resolution → verdict.

use offers_core::config::ComparatorConfig;
use offers_core::models::{
    ComparisonRow, ComparisonTable, Polarity, Product, SpecMatrix, Verdict,
};
use offers_core::traits::ISpecComparator;
use offers_observability::tracing_setup::events;
use tracing::debug;

use crate::magnitude::extract_magnitude;
use crate::matrix;
use crate::rules::{self, Resolution, RuleTable};
use crate::union;

/// Stateless spec comparator. Holds only configuration; every call is a pure
/// function of its arguments.
#[derive(Debug, Clone)]
pub struct ComparatorEngine {
    rules: RuleTable,
    missing_placeholder: String,
    rating_label: String,
    include_rating_row: bool,
}

impl ComparatorEngine {
    /// Engine with the built-in rule table and default labels.
    pub fn new() -> Self {
        Self::from_config(&ComparatorConfig::default())
    }

    pub fn from_config(config: &ComparatorConfig) -> Self {
        Self {
            rules: RuleTable::new(config.effective_rules()),
            missing_placeholder: config.missing_placeholder.clone(),
            rating_label: config.rating_label.clone(),
            include_rating_row: config.include_rating_row,
        }
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn missing_placeholder(&self) -> &str {
        &self.missing_placeholder
    }

    /// Which polarity applies to `name`, and which rule decided it.
    pub fn resolve_polarity(&self, name: &str) -> Resolution<'_> {
        self.rules.resolve(name)
    }

    /// Compare two overall ratings: higher wins, no text parsing.
    pub fn compare_ratings(&self, a: f64, b: f64) -> Verdict {
        rules::apply(Polarity::HigherIsBetter, a, b)
    }

    /// The full side-by-side view: header titles, rows, affiliate links.
    pub fn build_table(&self, a: &Product, b: &Product) -> ComparisonTable {
        let table = ComparisonTable {
            title_a: a.title.clone(),
            title_b: b.title.clone(),
            rows: self.build_comparison_rows(a, b),
            affiliate_link_a: a.affiliate_link.clone(),
            affiliate_link_b: b.affiliate_link.clone(),
        };
        let (wins_a, wins_b) = table.wins();
        events::comparison_built(&a.id, &b.id, table.rows.len(), wins_a, wins_b);
        table
    }

    /// N-product table driven by an ordered `(key, label)` list.
    pub fn build_matrix(&self, products: &[Product], labels: &[(String, String)]) -> SpecMatrix {
        matrix::build_matrix(products, labels, &self.missing_placeholder)
    }

    fn is_missing(&self, value: &str) -> bool {
        value.is_empty() || value == self.missing_placeholder
    }

    fn display_value(&self, product: &Product, name: &str) -> String {
        product
            .specs
            .get_text(name)
            .unwrap_or_else(|| self.missing_placeholder.clone())
    }

    fn rating_row(&self, a: &Product, b: &Product) -> ComparisonRow {
        ComparisonRow {
            name: self.rating_label.clone(),
            value_a: self.display_rating(a.rating),
            value_b: self.display_rating(b.rating),
            verdict: self.compare_ratings(a.rating, b.rating),
        }
    }

    fn display_rating(&self, rating: f64) -> String {
        if rating.is_finite() {
            rating.to_string()
        } else {
            self.missing_placeholder.clone()
        }
    }
}

impl Default for ComparatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ISpecComparator for ComparatorEngine {
    fn union_keys(&self, a: Option<&Product>, b: Option<&Product>) -> Vec<String> {
        union::union_keys(a.map(|p| &p.specs), b.map(|p| &p.specs))
    }

    fn compare(&self, name: &str, raw_a: &str, raw_b: &str) -> Verdict {
        let a = raw_a.trim();
        let b = raw_b.trim();

        if self.is_missing(a) || self.is_missing(b) {
            return Verdict::Incomparable;
        }
        if a == b {
            return Verdict::Equal;
        }

        let (Some(magnitude_a), Some(magnitude_b)) = (extract_magnitude(a), extract_magnitude(b))
        else {
            return Verdict::Incomparable;
        };

        let resolution = self.rules.resolve(name);
        let verdict = rules::apply(resolution.polarity, magnitude_a, magnitude_b);
        debug!(
            spec = %name,
            rule = %resolution.rule_name(),
            polarity = ?resolution.polarity,
            magnitude_a,
            magnitude_b,
            ?verdict,
            "compared spec values"
        );
        verdict
    }

    fn build_comparison_rows(&self, a: &Product, b: &Product) -> Vec<ComparisonRow> {
        let keys = self.union_keys(Some(a), Some(b));
        let mut rows = Vec::with_capacity(keys.len() + 1);

        if self.include_rating_row {
            rows.push(self.rating_row(a, b));
        }

        for name in keys {
            let value_a = self.display_value(a, &name);
            let value_b = self.display_value(b, &name);
            let verdict = self.compare(&name, &value_a, &value_b);
            rows.push(ComparisonRow {
                name,
                value_a,
                value_b,
                verdict,
            });
        }
        rows
    }
}
