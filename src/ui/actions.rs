//! Named actions triggered from rendered markup
//!
//! Cards and list rows carry `data-action` attributes; the embedder turns a
//! click on one into a dispatch through this registry.

use crate::core::client::{AdminApi, StatusTarget};
use crate::core::entities::EntityId;
use crate::ui::host::Host;
use crate::utils::error::{AdminError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use tracing::{info, warn};

pub const TOGGLE_TEAM_STATUS: &str = "toggleTeamStatus";
pub const TOGGLE_ROLE_STATUS: &str = "toggleRoleStatus";
pub const EDIT_USER_ASSIGNMENT: &str = "editUserAssignment";
pub const REMOVE_USER_ASSIGNMENT: &str = "removeUserAssignment";

/// Arguments carried by the triggering element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionArgs {
    pub id: EntityId,
    /// Current active flag, for status toggles
    pub current: Option<bool>,
}

impl ActionArgs {
    pub fn id(id: EntityId) -> Self {
        Self { id, current: None }
    }

    pub fn toggle(id: EntityId, current: bool) -> Self {
        Self {
            id,
            current: Some(current),
        }
    }
}

/// How an action ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The user declined the confirmation
    Cancelled,
    Completed,
    /// The server refused; the user was told
    Failed,
}

impl fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => write!(f, "cancelled"),
            Self::Completed => write!(f, "completed"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// A named action
#[async_trait]
pub trait ActionHandler: Send + Sync {
    async fn run(
        &self,
        api: &dyn AdminApi,
        host: &mut dyn Host,
        args: ActionArgs,
    ) -> ActionOutcome;
}

/// Confirm, then flip a team or role active flag on the server
pub struct StatusToggle {
    target: StatusTarget,
}

impl StatusToggle {
    pub fn new(target: StatusTarget) -> Self {
        Self { target }
    }

    pub fn confirmation(&self, activate: bool) -> String {
        format!(
            "Are you sure you want to {} this {}?",
            if activate { "activate" } else { "deactivate" },
            self.target.noun()
        )
    }

    pub fn failure_message(&self) -> String {
        format!("Failed to update {} status", self.target.noun())
    }
}

#[async_trait]
impl ActionHandler for StatusToggle {
    async fn run(
        &self,
        api: &dyn AdminApi,
        host: &mut dyn Host,
        args: ActionArgs,
    ) -> ActionOutcome {
        let activate = !args.current.unwrap_or(false);
        if !host.confirm(&self.confirmation(activate)) {
            return ActionOutcome::Cancelled;
        }

        match api.set_status(self.target, args.id, activate).await {
            Ok(()) => {
                info!("Set {} {} active={}", self.target.noun(), args.id, activate);
                host.reload();
                ActionOutcome::Completed
            }
            Err(e) => {
                warn!("Status update for {} {} failed: {}", self.target.noun(), args.id, e);
                host.alert(&self.failure_message());
                ActionOutcome::Failed
            }
        }
    }
}

/// Go to the edit page of a user
pub struct EditAssignment;

#[async_trait]
impl ActionHandler for EditAssignment {
    async fn run(
        &self,
        _api: &dyn AdminApi,
        host: &mut dyn Host,
        args: ActionArgs,
    ) -> ActionOutcome {
        host.navigate(&format!("/admin/users/edit/{}", args.id));
        ActionOutcome::Completed
    }
}

/// Confirm, then go to the assignment removal route
pub struct RemoveAssignment;

pub const REMOVE_CONFIRMATION: &str = "Are you sure you want to remove this user assignment?";

#[async_trait]
impl ActionHandler for RemoveAssignment {
    async fn run(
        &self,
        _api: &dyn AdminApi,
        host: &mut dyn Host,
        args: ActionArgs,
    ) -> ActionOutcome {
        if !host.confirm(REMOVE_CONFIRMATION) {
            return ActionOutcome::Cancelled;
        }
        host.navigate(&format!("/admin/users/remove-assignment/{}", args.id));
        ActionOutcome::Completed
    }
}

/// Table of actions by name
pub struct ActionRegistry {
    handlers: HashMap<String, Box<dyn ActionHandler>>,
}

impl Default for ActionRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(TOGGLE_TEAM_STATUS, StatusToggle::new(StatusTarget::Team));
        registry.register(TOGGLE_ROLE_STATUS, StatusToggle::new(StatusTarget::Role));
        registry.register(EDIT_USER_ASSIGNMENT, EditAssignment);
        registry.register(REMOVE_USER_ASSIGNMENT, RemoveAssignment);
        registry
    }
}

impl fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("actions", &self.names())
            .finish()
    }
}

impl ActionRegistry {
    /// Registry with the built-in actions
    pub fn new() -> Self {
        Self::default()
    }

    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    pub fn register(&mut self, name: &str, handler: impl ActionHandler + 'static) {
        self.handlers.insert(name.to_string(), Box::new(handler));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub async fn run(
        &self,
        name: &str,
        api: &dyn AdminApi,
        host: &mut dyn Host,
        args: ActionArgs,
    ) -> Result<ActionOutcome> {
        let handler = self
            .handlers
            .get(name)
            .ok_or_else(|| AdminError::not_found(format!("Unknown action: {name}")))?;
        Ok(handler.run(api, host, args).await)
    }
}
