pub mod product_source;
pub mod spec_comparator;

pub use product_source::IProductSource;
pub use spec_comparator::ISpecComparator;
