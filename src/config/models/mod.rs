//! Configuration data models
//!
//! This module defines all configuration structures used by the console.

#![allow(missing_docs)]

pub mod api;
pub mod logging;
pub mod ui;

// Re-export all configuration types
pub use api::*;
pub use logging::*;
pub use ui::*;

/// Default admin server base URL
pub fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

/// Default user agent sent with every request
pub fn default_user_agent() -> String {
    format!("org-admin-rs/{}", env!("CARGO_PKG_VERSION"))
}

/// Default notification lifetime in milliseconds
pub fn default_notification_dismiss_ms() -> u64 {
    5000
}

/// Default delay before redirecting after a successful create
pub fn default_redirect_delay_ms() -> u64 {
    1500
}

/// Default viewport width below which the sidebar starts collapsed
pub fn default_mobile_breakpoint_px() -> u32 {
    768
}

/// Default log level directive
pub fn default_log_level() -> String {
    "info".to_string()
}
