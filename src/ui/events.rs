//! Events flowing into and out of the console

use crate::ui::actions::ActionArgs;
use crate::ui::dom::NodeId;
use std::fmt;

/// Input events from the embedder, dispatched one at a time
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// A select or input committed a new value
    Change { target: String, value: String },
    /// Text typed into an input
    Input { target: String, value: String },
    Click { target: NodeId },
    KeyDown { key: String },
    Submit { form: String },
    /// A `data-action` element was activated
    Action { name: String, args: ActionArgs },
    /// A collapsible section finished opening
    CollapseShown { target: String },
    /// A collapsible section finished closing
    CollapseHidden { target: String },
}

impl UiEvent {
    pub fn change(target: &str, value: &str) -> Self {
        Self::Change {
            target: target.to_string(),
            value: value.to_string(),
        }
    }

    pub fn input(target: &str, value: &str) -> Self {
        Self::Input {
            target: target.to_string(),
            value: value.to_string(),
        }
    }

    pub fn key(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
        }
    }

    pub fn submit(form: &str) -> Self {
        Self::Submit {
            form: form.to_string(),
        }
    }

    pub fn action(name: &str, args: ActionArgs) -> Self {
        Self::Action {
            name: name.to_string(),
            args,
        }
    }
}

/// Notifications the console emits for the embedder, carrying the raw value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEvent {
    DepartmentChanged { department_id: String },
    TeamChanged { team_id: String },
    RoleChanged { role_id: String },
}

impl ConsoleEvent {
    /// DOM event name
    pub fn name(&self) -> &'static str {
        match self {
            Self::DepartmentChanged { .. } => "departmentChanged",
            Self::TeamChanged { .. } => "teamChanged",
            Self::RoleChanged { .. } => "roleChanged",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::DepartmentChanged { department_id } => department_id,
            Self::TeamChanged { team_id } => team_id,
            Self::RoleChanged { role_id } => role_id,
        }
    }
}

impl fmt::Display for ConsoleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.value())
    }
}
