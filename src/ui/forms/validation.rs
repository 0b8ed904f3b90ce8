//! Advisory client-side form validation
//!
//! These checks only spare the user a round trip; the server re-validates.

use super::form::{FieldKind, Form};
use crate::utils::error::{AdminError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

pub const INVALID_EMAIL: &str = "Invalid email format";

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Validate `form`, marking offending fields invalid
///
/// Previous marks are cleared first. A failure carries the messages in field
/// order: all required-field failures, then email-format failures.
pub fn validate_form(form: &mut Form) -> Result<()> {
    let mut errors = Vec::new();

    for field in &mut form.fields {
        field.invalid = false;
    }

    for field in form.fields.iter_mut().filter(|f| f.required) {
        if field.value.trim().is_empty() {
            field.invalid = true;
            errors.push(format!("{} is required", field.label()));
        }
    }

    for field in form.fields.iter_mut().filter(|f| f.kind == FieldKind::Email) {
        if !field.value.is_empty() && !is_valid_email(&field.value) {
            field.invalid = true;
            errors.push(INVALID_EMAIL.to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AdminError::Validation(errors))
    }
}
