//! Tracing setup: structured logging with event definitions.

pub mod events;

use offers_core::config::ObservabilityConfig;
use offers_core::errors::{OffersError, OffersResult};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive.
pub const LOG_ENV_VAR: &str = "OFFERS_LOG";

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `OFFERS_LOG` environment variable for filtering.
/// Defaults to `info` level if not set. Panics if a global subscriber is
/// already installed; use [`try_init_tracing`] where that can happen.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .init();
}

/// Initialize tracing from config. `OFFERS_LOG` still wins over
/// `config.log_level` when set.
pub fn try_init_tracing(config: &ObservabilityConfig) -> OffersResult<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| OffersError::TracingInit {
            reason: format!("invalid filter '{}': {e}", config.log_level),
        })?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| OffersError::TracingInit {
        reason: e.to_string(),
    })
}
