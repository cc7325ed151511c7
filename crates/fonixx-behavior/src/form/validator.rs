//! Pure field validation.

use super::field::{FieldName, FormField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// Empty or missing value.
    #[error("required")]
    Required,
    /// Value present but fails the field's pattern.
    #[error("invalid format")]
    InvalidFormat,
}

impl FieldError {
    /// Text shown next to `field` for this error.
    pub fn message(self, field: FieldName) -> &'static str {
        match (field, self) {
            (FieldName::Name, _) => "Name is required",
            (FieldName::Email, Self::Required) => "Email is required",
            (FieldName::Email, Self::InvalidFormat) => "Please enter a valid email",
            (FieldName::Phone, Self::Required) => "Phone is required",
            (FieldName::Phone, Self::InvalidFormat) => "Please enter a valid phone number",
            (FieldName::Service, _) => "Please select a service",
            (FieldName::Message, _) => "Message is required",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub field: FormField,
    pub outcome: Result<(), FieldError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn error(&self) -> Option<FieldError> {
        self.outcome.err()
    }

    pub fn message(&self) -> Option<&'static str> {
        self.error().map(|e| e.message(self.field.name))
    }
}

/// Check one field. Never looks at other fields.
///
/// Emptiness is judged on the trimmed value; the pattern sees the raw
/// value, so a padded email is present but malformed.
pub fn validate(field: &FormField) -> ValidationResult {
    let outcome = if field.required && field.is_blank() {
        Err(FieldError::Required)
    } else {
        match field.pattern {
            Some(rule) if !field.raw_value.is_empty() && !rule.matches(&field.raw_value) => {
                Err(FieldError::InvalidFormat)
            }
            _ => Ok(()),
        }
    };

    ValidationResult {
        field: field.clone(),
        outcome,
    }
}

/// Run a full validation pass over every field, in order.
///
/// `value_of` returns the field's current value; a missing control
/// counts as empty.
pub fn validate_all<F>(value_of: F) -> Vec<ValidationResult>
where
    F: Fn(FieldName) -> Option<String>,
{
    FieldName::ALL
        .into_iter()
        .map(|name| FormField::read(name, value_of(name).unwrap_or_default()))
        .map(|field| validate(&field))
        .collect()
}
