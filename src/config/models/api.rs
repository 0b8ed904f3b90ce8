//! Admin API client configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Admin API client configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Base URL every admin route is resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds; requests never time out when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// User agent header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Request timeout, if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Override the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
