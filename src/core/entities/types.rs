//! Typed records for the admin API payloads

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier shared by all entity collections
pub type EntityId = i64;

/// Reference to another entity embedded in a payload
///
/// Nested objects carry more fields than this; the extra ones are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: EntityId,
    pub name: String,
}

/// Department entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Team entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Owning department
    #[serde(default)]
    pub department: Option<EntityRef>,
    /// Missing or null means active
    #[serde(default)]
    pub active: Option<bool>,
}

impl Team {
    pub fn is_active(&self) -> bool {
        self.active.unwrap_or(true)
    }

    pub fn department_id(&self) -> Option<EntityId> {
        self.department.as_ref().map(|d| d.id)
    }

    pub fn department_name(&self) -> Option<&str> {
        self.department.as_ref().map(|d| d.name.as_str())
    }
}

/// Role entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub role_level: Option<i32>,
    /// Ordered permission strings; `None` when the payload omits them
    #[serde(default)]
    pub permissions: Option<Vec<String>>,
    #[serde(default)]
    pub active: Option<bool>,
}

impl Role {
    pub fn is_active(&self) -> bool {
        self.active.unwrap_or(true)
    }
}

/// Assignment of a user to a role, optionally scoped to a department and team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRole {
    pub role: EntityRef,
    #[serde(default)]
    pub department: Option<EntityRef>,
    #[serde(default)]
    pub team: Option<EntityRef>,
    #[serde(default)]
    pub active: Option<bool>,
}

/// User entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub last_name: String,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub team: Option<EntityRef>,
    #[serde(default)]
    pub user_roles: Option<Vec<UserRole>>,
}

impl User {
    /// Role assignments; empty when the payload omits them
    pub fn roles(&self) -> &[UserRole] {
        self.user_roles.as_deref().unwrap_or(&[])
    }

    pub fn team_id(&self) -> Option<EntityId> {
        self.team.as_ref().map(|t| t.id)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// First letter of the first and last name
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .next()
            .into_iter()
            .chain(self.last_name.chars().next())
            .collect()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
