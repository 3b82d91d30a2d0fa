//! Title search used by the product pickers.

use offers_core::models::Product;

/// Products whose title contains `query`, ignoring case. Catalog order is
/// preserved and an empty query keeps everything.
pub fn filter_by_title<'p>(products: &'p [Product], query: &str) -> Vec<&'p Product> {
    products.iter().filter(|p| p.title_matches(query)).collect()
}
