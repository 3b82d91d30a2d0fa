//! Generic N-product spec table (no verdicts).

use offers_core::models::{MatrixRow, Product, SpecMatrix};

/// One row per `(key, label)` entry, one cell per product. Products lacking a
/// key get `placeholder`.
pub fn build_matrix(
    products: &[Product],
    labels: &[(String, String)],
    placeholder: &str,
) -> SpecMatrix {
    let rows = labels
        .iter()
        .map(|(key, label)| MatrixRow {
            key: key.clone(),
            label: label.clone(),
            cells: products
                .iter()
                .map(|p| {
                    p.specs
                        .get_text(key)
                        .unwrap_or_else(|| placeholder.to_string())
                })
                .collect(),
        })
        .collect();

    SpecMatrix {
        product_titles: products.iter().map(|p| p.title.clone()).collect(),
        rows,
    }
}
