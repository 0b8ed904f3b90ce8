//! Configuration validators for the api, ui and logging sections

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use url::Url;

impl Validate for ApiConfig {
    const SECTION: &'static str = "API";

    fn validate(&self) -> Result<(), String> {
        debug!("Validating api configuration");

        if self.base_url.trim().is_empty() {
            return Err("API base URL cannot be empty".to_string());
        }

        let url = Url::parse(&self.base_url)
            .map_err(|e| format!("Invalid API base URL '{}': {}", self.base_url, e))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "API base URL must use http or https, got '{}'",
                url.scheme()
            ));
        }

        if url.host_str().is_none() {
            return Err(format!("API base URL '{}' has no host", self.base_url));
        }

        if self.timeout_secs == Some(0) {
            return Err("API timeout must be greater than 0 when set".to_string());
        }

        if self.user_agent.trim().is_empty() {
            return Err("User agent cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Validate for UiConfig {
    const SECTION: &'static str = "UI";

    fn validate(&self) -> Result<(), String> {
        debug!("Validating ui configuration");

        if self.notification_dismiss_ms == 0 {
            return Err("Notification dismiss delay must be greater than 0".to_string());
        }

        if self.redirect_delay_ms == 0 {
            return Err("Redirect delay must be greater than 0".to_string());
        }

        if self.mobile_breakpoint_px == 0 {
            return Err("Mobile breakpoint must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    const SECTION: &'static str = "Logging";

    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }

        EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|e| format!("Invalid log level '{}': {}", self.level, e))
    }
}
