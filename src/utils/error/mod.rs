//! Error handling for the admin console
//!
//! One error enum covers transport failures, non-success HTTP statuses,
//! advisory validation failures and malformed server payloads.

mod helpers;
mod types;

pub use types::{AdminError, Result};
