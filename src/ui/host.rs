//! Embedder capabilities the console calls out to
//!
//! Browser bindings map these onto `window.confirm`, `alert`, `location`
//! and native form submission; the CLI maps them onto the terminal.

use std::time::Duration;

/// Capabilities provided by whatever hosts the console
pub trait Host: Send {
    /// Ask a yes/no question; `true` means confirmed
    fn confirm(&mut self, message: &str) -> bool;

    /// Blocking message box
    fn alert(&mut self, message: &str);

    /// Leave the page for `url`
    fn navigate(&mut self, url: &str);

    /// Leave the page for `url` once `delay` has passed
    fn navigate_after(&mut self, url: &str, delay: Duration);

    /// Reload the current page
    fn reload(&mut self);

    /// Let the browser submit the form itself
    fn submit_native(&mut self, form_id: &str);
}

/// A navigation requested by the console
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub url: String,
    pub delay: Option<Duration>,
}

/// Host that answers confirmations with a fixed value and records every call
#[derive(Debug, Clone)]
pub struct RecordingHost {
    pub confirm_answer: bool,
    pub confirmations: Vec<String>,
    pub alerts: Vec<String>,
    pub navigations: Vec<Navigation>,
    pub reloads: usize,
    pub native_submissions: Vec<String>,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::confirming(true)
    }
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn confirming(answer: bool) -> Self {
        Self {
            confirm_answer: answer,
            confirmations: Vec::new(),
            alerts: Vec::new(),
            navigations: Vec::new(),
            reloads: 0,
            native_submissions: Vec::new(),
        }
    }

    /// Most recent navigation target
    pub fn last_navigation(&self) -> Option<&Navigation> {
        self.navigations.last()
    }
}

impl Host for RecordingHost {
    fn confirm(&mut self, message: &str) -> bool {
        self.confirmations.push(message.to_string());
        self.confirm_answer
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn navigate(&mut self, url: &str) {
        self.navigations.push(Navigation {
            url: url.to_string(),
            delay: None,
        });
    }

    fn navigate_after(&mut self, url: &str, delay: Duration) {
        self.navigations.push(Navigation {
            url: url.to_string(),
            delay: Some(delay),
        });
    }

    fn reload(&mut self) {
        self.reloads += 1;
    }

    fn submit_native(&mut self, form_id: &str) {
        self.native_submissions.push(form_id.to_string());
    }
}
