//! Validation for page glue sections: nav, reveal, window, and site.

use crate::schema::FonixxConfig;

use super::helpers::{validate_non_empty, validate_range, validate_range_f64};

pub(crate) fn validate_nav(errors: &mut Vec<String>, config: &FonixxConfig) {
    validate_range_f64(
        errors,
        "nav.scroll_threshold",
        config.nav.scroll_threshold,
        0.0,
        2000.0,
    );
    validate_non_empty(errors, "nav.default_page", &config.nav.default_page);
    validate_non_empty(errors, "nav.navbar_selector", &config.nav.navbar_selector);
    validate_non_empty(errors, "nav.menu_selector", &config.nav.menu_selector);
    validate_non_empty(errors, "nav.toggle_selector", &config.nav.toggle_selector);
}

pub(crate) fn validate_reveal(errors: &mut Vec<String>, config: &FonixxConfig) {
    validate_range_f64(
        errors,
        "reveal.threshold",
        config.reveal.threshold,
        0.0,
        1.0,
    );
    if config.reveal.enabled && config.reveal.selectors.is_empty() {
        errors.push("reveal.selectors must not be empty when reveal is enabled".into());
    }
    for (i, selector) in config.reveal.selectors.iter().enumerate() {
        validate_non_empty(errors, &format!("reveal.selectors[{i}]"), selector);
    }
}

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &FonixxConfig) {
    validate_range(
        errors,
        "window.width",
        u64::from(config.window.width),
        320,
        7680,
    );
    validate_range(
        errors,
        "window.height",
        u64::from(config.window.height),
        240,
        4320,
    );
}

pub(crate) fn validate_site(errors: &mut Vec<String>, config: &FonixxConfig) {
    validate_non_empty(errors, "site.start_page", &config.site.start_page);
    if config.site.start_page.contains("..") {
        errors.push("site.start_page must stay inside the asset directory".into());
    }
}
