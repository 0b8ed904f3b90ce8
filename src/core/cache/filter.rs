//! Filter axes and match predicates
//!
//! Selections and the search term are independent axes. Every predicate
//! treats an empty search term as "matches everything".

use crate::core::entities::{Department, EntityId, Role, Team, User};
use tracing::warn;

/// Current selection and search state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub department: Option<EntityId>,
    pub team: Option<EntityId>,
    pub role: Option<EntityId>,
    search: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalized (trimmed, lowercased) search term
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, raw: &str) {
        self.search = normalize_search(raw);
    }

    pub fn with_department(mut self, id: EntityId) -> Self {
        self.department = Some(id);
        self
    }

    pub fn with_team(mut self, id: EntityId) -> Self {
        self.team = Some(id);
        self
    }

    pub fn with_role(mut self, id: EntityId) -> Self {
        self.role = Some(id);
        self
    }

    pub fn with_search(mut self, raw: &str) -> Self {
        self.set_search(raw);
        self
    }

    /// No selection and no search term
    pub fn is_empty(&self) -> bool {
        self.department.is_none()
            && self.team.is_none()
            && self.role.is_none()
            && self.search.is_empty()
    }
}

/// Parse a raw select value; empty or non-numeric means no selection
pub fn parse_selection(raw: &str) -> Option<EntityId> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    match raw.parse() {
        Ok(id) => Some(id),
        Err(_) => {
            warn!("Ignoring non-numeric selection value '{}'", raw);
            None
        }
    }
}

pub fn normalize_search(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn contains(haystack: &str, term: &str) -> bool {
    haystack.to_lowercase().contains(term)
}

pub fn department_matches(department: &Department, term: &str) -> bool {
    term.is_empty() || contains(&department.name, term)
}

pub fn team_matches(team: &Team, term: &str) -> bool {
    term.is_empty()
        || contains(&team.name, term)
        || team.department_name().is_some_and(|name| contains(name, term))
}

pub fn role_matches(role: &Role, term: &str) -> bool {
    term.is_empty()
        || contains(&role.name, term)
        || role.description.as_deref().is_some_and(|d| contains(d, term))
}

pub fn user_matches(user: &User, term: &str) -> bool {
    term.is_empty()
        || contains(&user.first_name, term)
        || contains(&user.last_name, term)
        || contains(&user.email, term)
        || contains(&user.username, term)
}

/// Team belongs to the selected department, if any
pub fn team_in_department(team: &Team, department: Option<EntityId>) -> bool {
    department.is_none_or(|id| team.department_id() == Some(id))
}

/// User belongs to the selected team, if any
pub fn user_in_team(user: &User, team: Option<EntityId>) -> bool {
    team.is_none_or(|id| user.team_id() == Some(id))
}

/// User holds an assignment scoped to the selected department, if any
pub fn user_assigned_in_department(user: &User, department: Option<EntityId>) -> bool {
    department.is_none_or(|id| {
        user.roles()
            .iter()
            .any(|ur| ur.department.as_ref().is_some_and(|d| d.id == id))
    })
}

/// User holds the selected role, if any
pub fn user_has_role(user: &User, role: Option<EntityId>) -> bool {
    role.is_none_or(|id| user.roles().iter().any(|ur| ur.role.id == id))
}
