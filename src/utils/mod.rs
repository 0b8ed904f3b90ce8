//! Utility modules for the admin console
//!
//! - **error**: crate error type and result alias
//! - **logging**: tracing subscriber setup
//! - **html**: escaping for rendered fragments

pub mod error;
pub mod html;
pub mod logging;

pub use error::{AdminError, Result};

/// Truncate string to specified length with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
