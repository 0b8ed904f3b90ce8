//! Admin API client
//!
//! [`AdminApi`] is the seam between the console and the server;
//! [`HttpAdminClient`] implements it over reqwest.

pub mod endpoints;
mod http;
mod traits;

pub use endpoints::StatusTarget;
pub use http::HttpAdminClient;
pub use traits::AdminApi;
