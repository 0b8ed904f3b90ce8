//! # org-admin-rs
//!
//! A typed, headless model of an organization admin console: departments,
//! teams, roles and users fetched from the admin HTTP API, filtered on the
//! client and rendered into an in-memory document an embedder mirrors onto
//! its real UI.
//!
//! ## Features
//!
//! - **Typed boundary**: every API payload is decoded into records and
//!   checked, with a distinct error for malformed responses
//! - **Filter engine**: department, team and role selections composed with a
//!   free-text search, never mutating the cached collections
//! - **Form handling**: advisory validation, async create requests and
//!   transient notifications
//! - **Action registry**: status toggles and assignment navigation by name
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use org_admin_rs::{AdminConsole, Config, Document, HttpAdminClient, RecordingHost, UiEvent};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let api = Arc::new(HttpAdminClient::new(config.api())?);
//!     let mut console = AdminConsole::new(
//!         config.ui().clone(),
//!         api,
//!         RecordingHost::new(),
//!         Document::new("/admin/teams"),
//!     );
//!
//!     console.start().await;
//!     console.dispatch(UiEvent::input("searchInput", "platform")).await?;
//!     for team in console.views().teams {
//!         println!("{}", team.name);
//!     }
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod ui;
pub mod utils;

pub use config::Config;
pub use core::{
    AdminApi, Department, EntityCache, EntityId, EntityRef, FilterState, FilteredViews,
    HttpAdminClient, LoadState, Role, StatusTarget, Team, User, UserRole,
};
pub use ui::{
    ActionArgs, ActionOutcome, ActionRegistry, AdminConsole, ConsoleEvent, Document, Element,
    Form, Host, RecordingHost, Severity, UiEvent,
};
pub use utils::error::{AdminError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information stamped by `build.rs`
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build time
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("ORG_ADMIN_BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("ORG_ADMIN_GIT_HASH").unwrap_or("unknown"),
            rust_version: option_env!("ORG_ADMIN_RUST_VERSION").unwrap_or("unknown"),
        }
    }
}

/// Version, build time, git hash and compiler this binary was built with
///
/// Fields not stamped at build time read `unknown`.
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
