//! # offers-catalog
//!
//! In-process product source backed by a JSON snapshot of the published
//! reviews. Supplies the products the comparator picks from.

pub mod json_catalog;
pub mod search;

pub use json_catalog::JsonCatalog;
pub use search::filter_by_title;
