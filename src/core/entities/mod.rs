//! Department, team, role and user records
//!
//! Records mirror the admin API's camelCase JSON. Optional data (permissions,
//! role assignments, team ownership) stays optional so callers can render
//! placeholders instead of failing.

mod parse;
mod types;

pub use parse::{Entity, check_collection, decode_collection};
pub use types::{Department, EntityId, EntityRef, Role, Team, User, UserRole};
