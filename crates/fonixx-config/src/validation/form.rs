//! Contact form and theme validation.

use crate::schema::FonixxConfig;

use super::helpers::{
    validate_color_field, validate_length_field, validate_non_empty, validate_range,
};

/// Validate notice timing, form selectors and annotation sizes.
pub(crate) fn validate_form(errors: &mut Vec<String>, config: &FonixxConfig) {
    validate_non_empty(errors, "form.selector", &config.form.selector);
    validate_non_empty(errors, "form.notice_text", &config.form.notice_text);
    validate_range(
        errors,
        "form.notice_delay_ms",
        config.form.notice_delay_ms,
        500,
        60_000,
    );
    validate_range(
        errors,
        "form.notice_fade_ms",
        config.form.notice_fade_ms,
        0,
        5_000,
    );
    validate_length_field(errors, "form.error_font_size", &config.form.error_font_size);
    validate_length_field(errors, "form.error_margin_top", &config.form.error_margin_top);
}

/// Validate every theme color.
pub(crate) fn validate_theme(errors: &mut Vec<String>, config: &FonixxConfig) {
    let theme = &config.theme;
    validate_color_field(errors, "theme.error", &theme.error);
    validate_color_field(
        errors,
        "theme.notice_gradient_start",
        &theme.notice_gradient_start,
    );
    validate_color_field(
        errors,
        "theme.notice_gradient_end",
        &theme.notice_gradient_end,
    );
    validate_color_field(errors, "theme.notice_text", &theme.notice_text);
}
