//! Error handling for TechOffers.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! The comparator engine itself never fails: undecidable rows degrade to
//! `Verdict::Incomparable`. Errors only come from loading data and config.

pub mod catalog_error;
pub mod config_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;

/// Top-level error for the workspace.
#[derive(Debug, thiserror::Error)]
pub enum OffersError {
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("tracing init failed: {reason}")]
    TracingInit { reason: String },
}

pub type OffersResult<T> = Result<T, OffersError>;
