// Single source of truth for all default values.

// --- Comparator ---
pub const DEFAULT_MISSING_PLACEHOLDER: &str = "-";
pub const DEFAULT_RATING_LABEL: &str = "Avaliação Geral";
pub const DEFAULT_INCLUDE_RATING_ROW: bool = true;

// --- Catalog ---
pub const DEFAULT_CATALOG_PATH: &str = "reviews.json";
pub const DEFAULT_NEWEST_FIRST: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;

// --- Files ---
pub const PROJECT_CONFIG_FILENAME: &str = "offers.toml";
pub const USER_CONFIG_DIRNAME: &str = ".techoffers";
pub const USER_CONFIG_FILENAME: &str = "config.toml";
