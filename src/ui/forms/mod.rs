//! Create forms: model, advisory validation and submission

mod form;
pub mod handler;
pub mod validation;

pub use form::{Field, FieldKind, Form, SubmitButton};
pub use handler::{FormKind, SubmitOutcome, submit_form};
pub use validation::{is_valid_email, validate_form};
