//! Core functionality for the console
//!
//! Typed entity records, the admin API client and the entity cache with its
//! filter engine. Nothing here touches the document model.

pub mod cache;
pub mod client;
pub mod entities;

#[cfg(test)]
pub(crate) mod testing;

pub use cache::{EntityCache, FilterState, FilteredViews, LoadState};
pub use client::{AdminApi, HttpAdminClient, StatusTarget};
pub use entities::{Department, EntityId, EntityRef, Role, Team, User, UserRole};
