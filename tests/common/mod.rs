//! Common test utilities for org-admin-rs
//!
//! - Payload factories shaped like the admin API responses
//! - A mock admin server serving those payloads
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::server::AdminServer;
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let server = AdminServer::with_sample_org().await;
//!     let mut console = server.console(pages::filter_page()).await;
//!     // ...
//! }
//! ```

pub mod server;

pub use fixtures::{OrgFactory, sample_org};
pub use server::AdminServer;
