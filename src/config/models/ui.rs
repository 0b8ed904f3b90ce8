//! Console UI timing and layout configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Console UI configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    /// How long a notification stays visible
    #[serde(default = "default_notification_dismiss_ms")]
    pub notification_dismiss_ms: u64,
    /// Delay between a successful create and the redirect
    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: u64,
    /// Viewport width below which the sidebar starts collapsed
    #[serde(default = "default_mobile_breakpoint_px")]
    pub mobile_breakpoint_px: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notification_dismiss_ms: default_notification_dismiss_ms(),
            redirect_delay_ms: default_redirect_delay_ms(),
            mobile_breakpoint_px: default_mobile_breakpoint_px(),
        }
    }
}

impl UiConfig {
    pub fn notification_dismiss(&self) -> Duration {
        Duration::from_millis(self.notification_dismiss_ms)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}
