/// TechOffers comparator version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lowest overall rating a review may carry.
pub const MIN_RATING: f64 = 0.0;

/// Highest overall rating a review may carry.
pub const MAX_RATING: f64 = 10.0;

/// Rule name reported when no polarity rule matched a spec name.
pub const FALLBACK_RULE_NAME: &str = "default_higher_is_better";
