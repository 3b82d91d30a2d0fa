//! Structured log events for key comparator operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a catalog load.
pub fn catalog_loaded(source: &str, product_count: usize) {
    tracing::info!(
        event = "catalog_loaded",
        source = %source,
        product_count = product_count,
        "catalog loaded"
    );
}

/// Log a product whose rating lies outside the 0–10 scale.
pub fn rating_out_of_range(product_id: &str, rating: f64) {
    tracing::warn!(
        event = "rating_out_of_range",
        product_id = %product_id,
        rating = rating,
        "product rating outside expected range"
    );
}

/// Log a finished two-product comparison.
pub fn comparison_built(product_a: &str, product_b: &str, rows: usize, wins_a: usize, wins_b: usize) {
    tracing::debug!(
        event = "comparison_built",
        product_a = %product_a,
        product_b = %product_b,
        rows = rows,
        wins_a = wins_a,
        wins_b = wins_b,
        "comparison built"
    );
}

/// Log a degradation trigger event.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}
