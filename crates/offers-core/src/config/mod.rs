//! Configuration system for TechOffers.
//! TOML-based, layered: env > project > user > defaults.

pub mod catalog_config;
pub mod comparator_config;
pub mod defaults;
pub mod observability_config;
pub mod offers_config;

pub use catalog_config::CatalogConfig;
pub use comparator_config::ComparatorConfig;
pub use observability_config::ObservabilityConfig;
pub use offers_config::OffersConfig;
