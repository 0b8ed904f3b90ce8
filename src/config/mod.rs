//! Configuration management for the console
//!
//! This module handles loading and validation of the console configuration,
//! either from a YAML file or from `ORG_ADMIN_*` environment variables.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{AdminError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Main configuration struct for the console
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Admin API client settings
    #[serde(default)]
    pub api: ApiConfig,
    /// UI timing and layout
    #[serde(default)]
    pub ui: UiConfig,
    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await?;

        let config = Self::from_yaml(&content)?;
        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content)?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    ///
    /// A `.env` file in the working directory is loaded first when present.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(base_url) = lookup("ORG_ADMIN_BASE_URL") {
            config.api.base_url = base_url;
        }
        if let Some(timeout) = lookup("ORG_ADMIN_TIMEOUT_SECS") {
            config.api.timeout_secs = Some(parse_var("ORG_ADMIN_TIMEOUT_SECS", &timeout)?);
        }
        if let Some(user_agent) = lookup("ORG_ADMIN_USER_AGENT") {
            config.api.user_agent = user_agent;
        }
        if let Some(dismiss) = lookup("ORG_ADMIN_NOTIFICATION_DISMISS_MS") {
            config.ui.notification_dismiss_ms =
                parse_var("ORG_ADMIN_NOTIFICATION_DISMISS_MS", &dismiss)?;
        }
        if let Some(delay) = lookup("ORG_ADMIN_REDIRECT_DELAY_MS") {
            config.ui.redirect_delay_ms = parse_var("ORG_ADMIN_REDIRECT_DELAY_MS", &delay)?;
        }
        if let Some(breakpoint) = lookup("ORG_ADMIN_MOBILE_BREAKPOINT_PX") {
            config.ui.mobile_breakpoint_px =
                parse_var("ORG_ADMIN_MOBILE_BREAKPOINT_PX", &breakpoint)?;
        }
        if let Some(level) = lookup("ORG_ADMIN_LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Some(format) = lookup("ORG_ADMIN_LOG_FORMAT") {
            config.logging.format = LogFormat::from_str(&format).map_err(AdminError::Config)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Get api configuration
    pub fn api(&self) -> &ApiConfig {
        &self.api
    }

    /// Get ui configuration
    pub fn ui(&self) -> &UiConfig {
        &self.ui
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.api.validate_section()?;
        self.ui.validate_section()?;
        self.logging.validate_section()?;

        debug!("Configuration validation completed");
        Ok(())
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| AdminError::config(format!("Invalid value for {}: {}", key, e)))
}
