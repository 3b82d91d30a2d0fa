//! # offers-core
//!
//! Foundation crate for the TechOffers product comparator.
//! Defines the shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::OffersConfig;
pub use errors::{OffersError, OffersResult};
pub use models::{
    ComparisonRow, ComparisonTable, Polarity, PolarityRule, Product, SpecMatrix, SpecSheet,
    Verdict,
};
