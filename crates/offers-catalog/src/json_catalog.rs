//! `JsonCatalog`: products loaded from a JSON array on disk or in memory.

use std::collections::HashSet;
use std::path::Path;

use offers_core::config::CatalogConfig;
use offers_core::constants::{MAX_RATING, MIN_RATING};
use offers_core::errors::{CatalogError, OffersResult};
use offers_core::models::Product;
use offers_core::traits::IProductSource;
use offers_observability::tracing_setup::events;
use tracing::debug;

/// Immutable product list, already validated and ordered.
#[derive(Debug, Clone, Default)]
pub struct JsonCatalog {
    products: Vec<Product>,
}

impl JsonCatalog {
    /// Parse a JSON array of products, newest first.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Self::parse(json, "<string>", true)
    }

    /// Read and parse a catalog file, newest first.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        Self::read(path, true)
    }

    /// Load the catalog named by the `[catalog]` config section. Relative
    /// paths are resolved against `root`.
    pub fn from_config(config: &CatalogConfig, root: &Path) -> Result<Self, CatalogError> {
        let path = root.join(&config.path);
        Self::read(&path, config.newest_first)
    }

    /// Build a catalog from products that are already in memory.
    pub fn from_products(products: Vec<Product>, newest_first: bool) -> Result<Self, CatalogError> {
        Self::build(products, "<memory>", newest_first)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn read(path: &Path, newest_first: bool) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::parse(&content, &path.display().to_string(), newest_first)
    }

    fn parse(json: &str, source: &str, newest_first: bool) -> Result<Self, CatalogError> {
        let products: Vec<Product> =
            serde_json::from_str(json).map_err(|e| CatalogError::ParseFailed {
                reason: e.to_string(),
            })?;
        Self::build(products, source, newest_first)
    }

    fn build(
        mut products: Vec<Product>,
        source: &str,
        newest_first: bool,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: product.id.clone(),
                });
            }
            // NaN marks a review saved without a score.
            if product.rating.is_finite()
                && !(MIN_RATING..=MAX_RATING).contains(&product.rating)
            {
                events::rating_out_of_range(&product.id, product.rating);
            }
        }

        if newest_first {
            // Stable: equal or missing timestamps keep file order, missing last.
            products.sort_by(|a, b| match (a.created_at, b.created_at) {
                (Some(x), Some(y)) => y.cmp(&x),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            });
        }

        events::catalog_loaded(source, products.len());
        Ok(Self { products })
    }
}

impl IProductSource for JsonCatalog {
    fn list_products(&self) -> OffersResult<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn find(&self, id: &str) -> OffersResult<Product> {
        debug!(id, "catalog lookup");
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() }.into())
    }
}
