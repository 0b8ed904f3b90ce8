//! Admin API trait
//!
//! The console talks to the server only through this trait so embedders and
//! tests can substitute their own transport.

use super::endpoints::StatusTarget;
use crate::core::entities::{Department, EntityId, Role, Team, User};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Operations the console needs from the admin server
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// `GET /api/departments`
    async fn departments(&self) -> Result<Vec<Department>>;

    /// `GET /api/teams`
    async fn teams(&self) -> Result<Vec<Team>>;

    /// `GET /api/teams?departmentId={id}`
    async fn teams_by_department(&self, department_id: EntityId) -> Result<Vec<Team>>;

    /// `GET /api/roles`
    async fn roles(&self) -> Result<Vec<Role>>;

    /// `GET /api/users`
    async fn users(&self) -> Result<Vec<User>>;

    /// `POST /admin/teams/create` with URL-encoded form entries
    async fn create_team(&self, entries: &[(String, String)]) -> Result<()>;

    /// `POST /admin/roles/create` with a JSON body
    async fn create_role(&self, payload: &serde_json::Value) -> Result<()>;

    /// `POST /admin/{teams|roles}/status/{id}` with `active={bool}`
    async fn set_status(&self, target: StatusTarget, id: EntityId, active: bool) -> Result<()>;
}
