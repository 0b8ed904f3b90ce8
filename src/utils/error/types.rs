//! Error types

use thiserror::Error;

/// Result type alias for the console
pub type Result<T> = std::result::Result<T, AdminError>;

/// Main error type for the console
#[derive(Error, Debug)]
pub enum AdminError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level failures (connect, TLS, body read)
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status {
        /// Status code returned by the server
        status: u16,
        /// Response body text, possibly empty
        body: String,
    },

    /// Response body could not be decoded or failed the boundary checks
    #[error("Malformed response from {endpoint}: {reason}")]
    MalformedResponse {
        /// Route that produced the body
        endpoint: String,
        /// What was wrong with it
        reason: String,
    },

    /// Advisory client-side validation failures, one message per violation
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// URL parsing errors
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing element, form or action
    #[error("Not found: {0}")]
    NotFound(String),
}
