//! Create-form submission

use super::form::Form;
use super::validation::validate_form;
use crate::core::client::AdminApi;
use crate::utils::error::{AdminError, Result};
use serde_json::{Map, Value};
use tracing::{error, info, warn};

/// Submit-control markup while a request is in flight
pub const LOADING_LABEL: &str = r#"<i class="fas fa-spinner fa-spin me-2"></i>Saving..."#;
/// Submit-control label when no `data-original-text` is set
pub const DEFAULT_SUBMIT_LABEL: &str = "Submit";
/// Field holding the role permission checkboxes
pub const PERMISSIONS_FIELD: &str = "permissions";

/// Forms the console intercepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Team,
    Role,
    User,
}

impl FormKind {
    pub fn from_form_id(id: &str) -> Option<Self> {
        match id {
            "teamForm" => Some(Self::Team),
            "roleForm" => Some(Self::Role),
            "userForm" => Some(Self::User),
            _ => None,
        }
    }

    pub fn noun(self) -> &'static str {
        match self {
            Self::Team => "team",
            Self::Role => "role",
            Self::User => "user",
        }
    }

    pub fn success_message(self) -> String {
        let noun = self.noun();
        let mut chars = noun.chars();
        let capitalized: String = chars
            .next()
            .map(|c| c.to_uppercase().chain(chars).collect())
            .unwrap_or_default();
        format!("{capitalized} created successfully!")
    }

    /// Shown when the server rejects without a body
    pub fn rejected_message(self) -> String {
        format!("Failed to create {}", self.noun())
    }

    /// Shown when the request itself failed
    pub fn error_message(self) -> String {
        format!("Error creating {}", self.noun())
    }

    /// List page to land on after a successful create
    pub fn redirect_path(self) -> String {
        format!("/admin/{}s", self.noun())
    }
}

/// How a submission ended
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Blocked by validation; nothing was sent
    Invalid(AdminError),
    Created(FormKind),
    /// Non-success status, with the message to show
    Rejected { kind: FormKind, message: String },
    /// Transport or other failure
    Failed { kind: FormKind, error: AdminError },
    /// Validated; the host submits it natively
    Native,
}

/// Put the submit control into or out of its loading state
pub fn set_form_loading(form: &mut Form, loading: bool) {
    let Some(button) = form.submit.as_mut() else {
        return;
    };

    button.disabled = loading;
    button.inner_html = if loading {
        LOADING_LABEL.to_string()
    } else {
        button
            .original_text
            .clone()
            .unwrap_or_else(|| DEFAULT_SUBMIT_LABEL.to_string())
    };
}

/// JSON body of the role form: entries plus the checked permissions array
pub fn role_payload(form: &Form) -> Value {
    let mut object: Map<String, Value> = form
        .object_entries()
        .into_iter()
        .map(|(name, value)| (name, Value::String(value)))
        .collect();
    let permissions = form
        .checked_values(PERMISSIONS_FIELD)
        .into_iter()
        .map(Value::String)
        .collect();
    object.insert(PERMISSIONS_FIELD.to_string(), Value::Array(permissions));
    Value::Object(object)
}

/// Validate and dispatch a recognized form
pub async fn submit_form(api: &dyn AdminApi, kind: FormKind, form: &mut Form) -> SubmitOutcome {
    if let Err(e) = validate_form(form) {
        warn!("Form {} failed: {}", form.id, e);
        return SubmitOutcome::Invalid(e);
    }

    // the host owns the native submission, including its loading state
    if kind == FormKind::User {
        info!("Handing {} to native submission", form.id);
        return SubmitOutcome::Native;
    }

    set_form_loading(form, true);

    let result = match kind {
        FormKind::Role => api.create_role(&role_payload(form)).await,
        _ => api.create_team(&form.object_entries()).await,
    };

    let outcome = settle(kind, form, result);
    set_form_loading(form, false);
    outcome
}

fn settle(kind: FormKind, form: &mut Form, result: Result<()>) -> SubmitOutcome {
    match result {
        Ok(()) => {
            info!("Created {} from {}", kind.noun(), form.id);
            form.reset();
            SubmitOutcome::Created(kind)
        }
        Err(e) if e.is_status() => {
            let message = e
                .server_message()
                .map(str::to_string)
                .unwrap_or_else(|| kind.rejected_message());
            warn!("Server rejected {}: {}", kind.noun(), e);
            SubmitOutcome::Rejected { kind, message }
        }
        Err(e) => {
            error!("{}: {}", kind.error_message(), e);
            SubmitOutcome::Failed { kind, error: e }
        }
    }
}
