//! Helper functions for creating and classifying errors

use super::types::AdminError;

impl AdminError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn malformed<E: Into<String>, R: Into<String>>(endpoint: E, reason: R) -> Self {
        Self::MalformedResponse {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }

    pub fn status<S: Into<String>>(status: u16, body: S) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Transport failure: the request never produced a response
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Http(_))
    }

    /// The server answered with a non-success status
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedResponse { .. })
    }

    /// Per-field messages of a validation failure, empty otherwise
    pub fn validation_messages(&self) -> &[String] {
        match self {
            Self::Validation(messages) => messages,
            _ => &[],
        }
    }

    /// Server-provided body text of a non-success response, if non-empty
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } if !body.trim().is_empty() => Some(body.as_str()),
            _ => None,
        }
    }

    /// Status code of a non-success response
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
