//! In-crate test fixtures: sample collections and a scripted [`AdminApi`]

use crate::core::client::{AdminApi, StatusTarget};
use crate::core::entities::{Department, EntityId, EntityRef, Role, Team, User, UserRole};
use crate::utils::error::{AdminError, Result};
use async_trait::async_trait;
use std::sync::Mutex;

pub fn entity_ref(id: EntityId, name: &str) -> EntityRef {
    EntityRef {
        id,
        name: name.to_string(),
    }
}

pub fn department(id: EntityId, name: &str) -> Department {
    Department {
        id,
        name: name.to_string(),
        description: None,
    }
}

pub fn team(id: EntityId, name: &str, department: Option<(EntityId, &str)>) -> Team {
    Team {
        id,
        name: name.to_string(),
        description: None,
        department: department.map(|(id, name)| entity_ref(id, name)),
        active: Some(true),
    }
}

pub fn role(id: EntityId, name: &str, description: &str, permissions: &[&str]) -> Role {
    Role {
        id,
        name: name.to_string(),
        description: Some(description.to_string()),
        role_level: None,
        permissions: Some(permissions.iter().map(|p| p.to_string()).collect()),
        active: Some(true),
    }
}

pub fn user(id: EntityId, first: &str, last: &str, team: Option<(EntityId, &str)>) -> User {
    User {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}@example.com", first.to_lowercase()),
        username: format!("{}.{}", first.to_lowercase(), last.to_lowercase()),
        team: team.map(|(id, name)| entity_ref(id, name)),
        user_roles: None,
    }
}

pub fn assignment(
    role: (EntityId, &str),
    department: Option<(EntityId, &str)>,
    team: Option<(EntityId, &str)>,
) -> UserRole {
    UserRole {
        role: entity_ref(role.0, role.1),
        department: department.map(|(id, name)| entity_ref(id, name)),
        team: team.map(|(id, name)| entity_ref(id, name)),
        active: Some(true),
    }
}

/// Sample organization used across unit tests
///
/// - departments: 1 Sales, 3 Engineering, 4 Alpha Research
/// - teams: 10 Alpha Squad (3), 11 Platform (3), 12 Alphanumerics (1), 13 Field (4), 14 Floating (none)
/// - roles: 1 Admin [read, write, delete], 2 Viewer [read], 3 Auditor (no permissions)
/// - users: 100 Ada (team 10, Admin in 3/10), 101 Grace (team 11, Viewer in 3),
///   102 Linus (team 12, no roles), 103 Barbara (no team, Viewer in 1)
pub fn sample_collections() -> (Vec<Department>, Vec<Team>, Vec<Role>, Vec<User>) {
    let departments = vec![
        department(1, "Sales"),
        department(3, "Engineering"),
        department(4, "Alpha Research"),
    ];

    let teams = vec![
        team(10, "Alpha Squad", Some((3, "Engineering"))),
        team(11, "Platform", Some((3, "Engineering"))),
        team(12, "Alphanumerics", Some((1, "Sales"))),
        team(13, "Field", Some((4, "Alpha Research"))),
        team(14, "Floating", None),
    ];

    let mut auditor = role(3, "Auditor", "Reads audit logs", &[]);
    auditor.permissions = None;
    let roles = vec![
        role(1, "Admin", "Full access", &["read", "write", "delete"]),
        role(2, "Viewer", "Read only", &["read"]),
        auditor,
    ];

    let mut ada = user(100, "Ada", "Lovelace", Some((10, "Alpha Squad")));
    ada.user_roles = Some(vec![assignment(
        (1, "Admin"),
        Some((3, "Engineering")),
        Some((10, "Alpha Squad")),
    )]);
    let mut grace = user(101, "Grace", "Hopper", Some((11, "Platform")));
    grace.user_roles = Some(vec![assignment((2, "Viewer"), Some((3, "Engineering")), None)]);
    let linus = user(102, "Linus", "Torvalds", Some((12, "Alphanumerics")));
    let mut barbara = user(103, "Barbara", "Liskov", None);
    barbara.user_roles = Some(vec![assignment((2, "Viewer"), Some((1, "Sales")), None)]);

    (departments, teams, roles, vec![ada, grace, linus, barbara])
}

/// Recorded outbound call
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    Departments,
    Teams,
    TeamsByDepartment(EntityId),
    Roles,
    Users,
    CreateTeam(Vec<(String, String)>),
    CreateRole(serde_json::Value),
    SetStatus(StatusTarget, EntityId, bool),
}

/// Scripted API: serves the sample collections and records every call
pub struct StaticApi {
    pub calls: Mutex<Vec<ApiCall>>,
    /// Status and body returned by mutating calls; `None` means success
    pub mutation_failure: Option<(u16, String)>,
    /// Fail every read with this status
    pub read_failure: Option<u16>,
}

impl StaticApi {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            mutation_failure: None,
            read_failure: None,
        }
    }

    pub fn failing_mutations(status: u16, body: &str) -> Self {
        Self {
            mutation_failure: Some((status, body.to_string())),
            ..Self::new()
        }
    }

    pub fn failing_reads(status: u16) -> Self {
        Self {
            read_failure: Some(status),
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn read<T>(&self, call: ApiCall, value: T) -> Result<T> {
        self.record(call);
        match self.read_failure {
            Some(status) => Err(AdminError::status(status, "")),
            None => Ok(value),
        }
    }

    fn mutate(&self, call: ApiCall) -> Result<()> {
        self.record(call);
        match &self.mutation_failure {
            Some((status, body)) => Err(AdminError::status(*status, body.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AdminApi for StaticApi {
    async fn departments(&self) -> Result<Vec<Department>> {
        self.read(ApiCall::Departments, sample_collections().0)
    }

    async fn teams(&self) -> Result<Vec<Team>> {
        self.read(ApiCall::Teams, sample_collections().1)
    }

    async fn teams_by_department(&self, department_id: EntityId) -> Result<Vec<Team>> {
        let teams = sample_collections()
            .1
            .into_iter()
            .filter(|t| t.department_id() == Some(department_id))
            .collect();
        self.read(ApiCall::TeamsByDepartment(department_id), teams)
    }

    async fn roles(&self) -> Result<Vec<Role>> {
        self.read(ApiCall::Roles, sample_collections().2)
    }

    async fn users(&self) -> Result<Vec<User>> {
        self.read(ApiCall::Users, sample_collections().3)
    }

    async fn create_team(&self, entries: &[(String, String)]) -> Result<()> {
        self.mutate(ApiCall::CreateTeam(entries.to_vec()))
    }

    async fn create_role(&self, payload: &serde_json::Value) -> Result<()> {
        self.mutate(ApiCall::CreateRole(payload.clone()))
    }

    async fn set_status(&self, target: StatusTarget, id: EntityId, active: bool) -> Result<()> {
        self.mutate(ApiCall::SetStatus(target, id, active))
    }
}
