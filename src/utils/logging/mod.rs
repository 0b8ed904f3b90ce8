//! Logging setup
//!
//! Installs a `tracing-subscriber` formatter driven by [`LoggingConfig`].
//! `RUST_LOG` still wins over the configured level when set.

use crate::config::{LogFormat, LoggingConfig};
use crate::utils::error::{AdminError, Result};
use tracing_subscriber::EnvFilter;

/// Build the env filter for a configured level
pub fn env_filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(level)
        .map_err(|e| AdminError::config(format!("Invalid log level '{}': {}", level, e)))
}

/// Initialize the global subscriber
///
/// Fails if the level does not parse or a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(&config.level)?;

    let installed = match config.format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(config.with_target)
            .with_thread_ids(false)
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(config.with_target)
            .with_current_span(false)
            .try_init(),
    };

    installed.map_err(|e| AdminError::config(format!("Failed to install logger: {}", e)))
}
