use crate::models::{ComparisonRow, Product, Verdict};

/// Spec-diffing over two products with schema-less specification maps.
///
/// Implementations must be stateless: identical inputs always yield identical
/// output, independent of call order.
pub trait ISpecComparator: Send + Sync {
    /// Distinct spec names of both products: A's keys in order, then B's new keys.
    fn union_keys(&self, a: Option<&Product>, b: Option<&Product>) -> Vec<String>;

    /// Decide which of two raw values is better for the spec `name`.
    fn compare(&self, name: &str, raw_a: &str, raw_b: &str) -> Verdict;

    /// Rating row followed by one row per union key.
    fn build_comparison_rows(&self, a: &Product, b: &Product) -> Vec<ComparisonRow>;
}
