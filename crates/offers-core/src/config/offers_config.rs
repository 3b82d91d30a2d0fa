//! Top-level TechOffers configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{defaults, CatalogConfig, ComparatorConfig, ObservabilityConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`OFFERS_*`)
/// 2. Project config (`offers.toml` in the project root)
/// 3. User config (`~/.techoffers/config.toml`)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OffersConfig {
    pub comparator: ComparatorConfig,
    pub catalog: CatalogConfig,
    pub observability: ObservabilityConfig,
}

impl OffersConfig {
    /// Load configuration with layered resolution, reading the user config
    /// from `$HOME/.techoffers/config.toml`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        Self::load_with_user_dir(root, user_config_dir().as_deref())
    }

    /// Same as [`OffersConfig::load`] with an explicit user config directory.
    pub fn load_with_user_dir(root: &Path, user_dir: Option<&Path>) -> Result<Self, ConfigError> {
        let mut merged = toml::Table::new();

        // Lowest priority first; later layers overwrite earlier keys.
        if let Some(dir) = user_dir {
            let user_path = dir.join(defaults::USER_CONFIG_FILENAME);
            if user_path.exists() {
                merge_tables(&mut merged, read_table(&user_path)?);
            }
        }

        let project_path = root.join(defaults::PROJECT_CONFIG_FILENAME);
        if project_path.exists() {
            merge_tables(&mut merged, read_table(&project_path)?);
        }

        let mut config: OffersConfig =
            toml::Value::Table(merged)
                .try_into()
                .map_err(|e: toml::de::Error| ConfigError::ParseError {
                    path: "<merged>".to_string(),
                    message: e.to_string(),
                })?;

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: OffersConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `OFFERS_*` overrides using `lookup` to read variables.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("OFFERS_MISSING_PLACEHOLDER") {
            self.comparator.missing_placeholder = val;
        }
        if let Some(val) = lookup("OFFERS_RATING_LABEL") {
            self.comparator.rating_label = val;
        }
        if let Some(val) = lookup("OFFERS_INCLUDE_RATING_ROW") {
            if let Ok(v) = val.parse::<bool>() {
                self.comparator.include_rating_row = v;
            }
        }
        if let Some(val) = lookup("OFFERS_CATALOG_PATH") {
            self.catalog.path = val;
        }
        if let Some(val) = lookup("OFFERS_LOG_LEVEL") {
            self.observability.log_level = val;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.comparator.missing_placeholder.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "comparator.missing_placeholder".to_string(),
                message: "must not be blank".to_string(),
            });
        }
        for (i, rule) in self.comparator.rules.iter().enumerate() {
            if rule.tokens.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("comparator.rules[{i}].tokens"),
                    message: format!("rule '{}' has no tokens", rule.name),
                });
            }
            if rule.tokens.iter().any(|t| t.is_empty()) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("comparator.rules[{i}].tokens"),
                    message: "empty token would match every spec name".to_string(),
                });
            }
            if rule.tokens.iter().any(|t| *t != t.to_lowercase()) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("comparator.rules[{i}].tokens"),
                    message: "tokens must be lowercase".to_string(),
                });
            }
        }
        if self.catalog.path.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "catalog.path".to_string(),
                message: "must not be blank".to_string(),
            });
        }
        Ok(())
    }
}

fn read_table(path: &Path) -> Result<toml::Table, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    content
        .parse::<toml::Table>()
        .map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}

/// Deep-merge `overlay` into `base`. Nested tables merge key by key; any other
/// value (arrays included) replaces the base value wholesale.
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge_tables(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

fn user_config_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(|home| PathBuf::from(home).join(defaults::USER_CONFIG_DIRNAME))
}
