use crate::errors::OffersResult;
use crate::models::Product;

/// Supplier of the products that can be picked for comparison.
///
/// The comparator treats the returned list as already materialized; it never
/// fetches on its own.
pub trait IProductSource: Send + Sync {
    /// All products, newest first.
    fn list_products(&self) -> OffersResult<Vec<Product>>;

    /// Look up a single product by id.
    fn find(&self, id: &str) -> OffersResult<Product>;
}
