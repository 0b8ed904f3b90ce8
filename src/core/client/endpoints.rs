//! Admin API routes

use crate::core::entities::EntityId;

pub const DEPARTMENTS: &str = "/api/departments";
pub const TEAMS: &str = "/api/teams";
pub const ROLES: &str = "/api/roles";
pub const USERS: &str = "/api/users";

pub const CREATE_TEAM: &str = "/admin/teams/create";
pub const CREATE_ROLE: &str = "/admin/roles/create";

/// Query parameter scoping `/api/teams` to one department
pub const DEPARTMENT_ID_PARAM: &str = "departmentId";

/// Entity whose active flag can be flipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTarget {
    Team,
    Role,
}

impl StatusTarget {
    /// Lowercase noun used in routes and prompts
    pub fn noun(self) -> &'static str {
        match self {
            StatusTarget::Team => "team",
            StatusTarget::Role => "role",
        }
    }

    /// `POST` route flipping the status of one entity
    pub fn status_path(self, id: EntityId) -> String {
        format!("/admin/{}s/status/{}", self.noun(), id)
    }

    /// Listing page the console returns to after a mutation
    pub fn list_page(self) -> String {
        format!("/admin/{}s", self.noun())
    }
}
