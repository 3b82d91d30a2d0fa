use serde::{Deserialize, Serialize};

use super::defaults;

/// Product catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path of the JSON snapshot of the reviews table.
    pub path: String,
    /// Order products by `created_at`, newest first.
    pub newest_first: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: defaults::DEFAULT_CATALOG_PATH.to_string(),
            newest_first: defaults::DEFAULT_NEWEST_FIRST,
        }
    }
}
