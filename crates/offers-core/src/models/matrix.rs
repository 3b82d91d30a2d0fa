use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// N-product specification table driven by an explicit label map.
/// Carries display text only; no verdicts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SpecMatrix {
    pub product_titles: Vec<String>,
    pub rows: Vec<MatrixRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MatrixRow {
    pub key: String,
    pub label: String,
    /// One cell per product, in product order.
    pub cells: Vec<String>,
}
