//! Validation trait for configuration sections

use crate::utils::error::{AdminError, Result};

/// A configuration section that can check its own values
pub trait Validate {
    /// Section name used as the error prefix, e.g. `API`
    const SECTION: &'static str;

    fn validate(&self) -> std::result::Result<(), String>;

    /// [`Validate::validate`] with the failure wrapped as a config error
    fn validate_section(&self) -> Result<()> {
        self.validate()
            .map_err(|e| AdminError::config(format!("{} config error: {}", Self::SECTION, e)))
    }
}
