//! Shared validation helpers used by all section validators.

use crate::colors::validate_color;
use crate::lengths::validate_length;

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u64, min: u64, max: u64) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `[min, max]` (float).
pub(crate) fn validate_range_f64(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is not a recognized color.
pub(crate) fn validate_color_field(errors: &mut Vec<String>, name: &str, value: &str) {
    if !validate_color(value) {
        errors.push(format!("{name} = {value:?} is not a valid color"));
    }
}

/// Push an error if `value` is not a plain CSS length.
pub(crate) fn validate_length_field(errors: &mut Vec<String>, name: &str, value: &str) {
    if !validate_length(value) {
        errors.push(format!("{name} = {value:?} is not a valid CSS length"));
    }
}

/// Push an error if `value` is blank.
pub(crate) fn validate_non_empty(errors: &mut Vec<String>, name: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{name} must not be empty"));
    }
}
