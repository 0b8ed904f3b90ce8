//! Boundary decoding for entity collections
//!
//! Every collection body is decoded into typed records and then checked:
//! ids must be unique within the collection and names must be non-blank.

use super::types::{Department, EntityId, Role, Team, User};
use crate::utils::error::{AdminError, Result};
use serde::de::DeserializeOwned;
use std::collections::HashSet;

/// Common view over the four entity kinds
pub trait Entity: DeserializeOwned {
    /// Singular kind name used in error messages
    const KIND: &'static str;

    fn id(&self) -> EntityId;

    /// Name that must be present for the record to be displayable
    fn label(&self) -> &str;
}

impl Entity for Department {
    const KIND: &'static str = "department";

    fn id(&self) -> EntityId {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl Entity for Team {
    const KIND: &'static str = "team";

    fn id(&self) -> EntityId {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl Entity for Role {
    const KIND: &'static str = "role";

    fn id(&self) -> EntityId {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl Entity for User {
    const KIND: &'static str = "user";

    fn id(&self) -> EntityId {
        self.id
    }

    fn label(&self) -> &str {
        &self.username
    }
}

/// Decode a JSON array body into a checked collection
pub fn decode_collection<T: Entity>(endpoint: &str, body: &[u8]) -> Result<Vec<T>> {
    let items: Vec<T> = serde_json::from_slice(body)
        .map_err(|e| AdminError::malformed(endpoint, format!("invalid {} list: {}", T::KIND, e)))?;

    check_collection(endpoint, &items)?;
    Ok(items)
}

/// Check collection invariants on already decoded records
pub fn check_collection<T: Entity>(endpoint: &str, items: &[T]) -> Result<()> {
    let mut seen = HashSet::with_capacity(items.len());

    for item in items {
        if !seen.insert(item.id()) {
            return Err(AdminError::malformed(
                endpoint,
                format!("duplicate {} id {}", T::KIND, item.id()),
            ));
        }
        if item.label().trim().is_empty() {
            return Err(AdminError::malformed(
                endpoint,
                format!("{} {} has a blank name", T::KIND, item.id()),
            ));
        }
    }

    Ok(())
}
