//! Transient notifications
//!
//! At most one notification is visible. Showing a new one replaces the old,
//! and each expires after the configured lifetime.

use crate::ui::dom::{Document, Element, NodeId};
use crate::utils::html;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::debug;

/// Class carried by the rendered notification element
pub const NOTIFICATION_CLASS: &str = "dynamic-notification";

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
}

impl Severity {
    /// Font Awesome icon name
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "check-circle",
            Self::Error => "exclamation-circle",
            Self::Info => "info-circle",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
            Self::Info => write!(f, "info"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
    pub shown_at: Instant,
}

/// Single-slot notification holder
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    lifetime: Duration,
    current: Option<Notification>,
    /// Element the slot is mirrored into, reused across renders
    node: Option<NodeId>,
}

impl NotificationCenter {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            lifetime,
            current: None,
            node: None,
        }
    }

    /// Replace whatever is showing
    pub fn show(&mut self, severity: Severity, message: impl Into<String>, now: Instant) {
        let message = message.into();
        debug!("Showing {} notification: {}", severity, message);
        self.current = Some(Notification {
            severity,
            message,
            shown_at: now,
        });
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Drop the notification once its lifetime has passed; returns whether it did
    pub fn dismiss_expired(&mut self, now: Instant) -> bool {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|n| now.saturating_duration_since(n.shown_at) >= self.lifetime);
        if expired {
            self.current = None;
        }
        expired
    }

    /// Mirror the slot into the document
    ///
    /// The element goes first inside `.container`, or `body` when there is none.
    pub fn render(&mut self, doc: &mut Document) {
        for node in doc.query_class(NOTIFICATION_CLASS) {
            doc.detach(node);
        }

        let Some(notification) = &self.current else {
            return;
        };

        let mut element = Element::new("div")
            .with_class("alert")
            .with_class(&format!("alert-{}", notification.severity))
            .with_class("alert-dismissible")
            .with_class("fade")
            .with_class("show")
            .with_class(NOTIFICATION_CLASS);
        element.inner_html = format!(
            r#"<i class="fas fa-{} me-2"></i>{}<button type="button" class="btn-close" data-bs-dismiss="alert"></button>"#,
            notification.severity.icon(),
            html::escape(&notification.message)
        );

        let container = doc
            .query_class("container")
            .first()
            .copied()
            .unwrap_or_else(|| doc.body());
        let node = match self.node {
            Some(node) if doc.contains(node) && doc.element(node).has_class(NOTIFICATION_CLASS) => {
                doc.replace(node, element);
                node
            }
            _ => doc.create(element),
        };
        doc.prepend_child(container, node);
        self.node = Some(node);
    }
}
