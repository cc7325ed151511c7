//! Full configuration validation.
//!
//! Each section has its own validator; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod form;
mod helpers;
mod page;


use crate::schema::FonixxConfig;
use fonixx_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &FonixxConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    form::validate_form(&mut errors, config);
    form::validate_theme(&mut errors, config);
    page::validate_nav(&mut errors, config);
    page::validate_reveal(&mut errors, config);
    page::validate_window(&mut errors, config);
    page::validate_site(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
