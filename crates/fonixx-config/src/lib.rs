//! Fonixx site configuration.
//!
//! TOML-based configuration for the site host: form feedback timing and
//! styling, navigation and reveal behavior, the host window, and logging.
//! All sections use defaults matching the live site, so partial configs
//! work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use fonixx_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod colors;
pub mod lengths;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{FonixxConfig, CONFIG_SCHEMA_VERSION};

use fonixx_common::ConfigError;
use std::path::Path;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default path gets a commented template on first run. A config that
/// fails validation is replaced by the defaults.
pub fn load_config(path: Option<&Path>) -> Result<FonixxConfig, ConfigError> {
    match path {
        Some(p) => toml_loader::load_from_path(p),
        None => toml_loader::load_default(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &FonixxConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&FonixxConfig::default());
        for section in [
            "\"site\"",
            "\"window\"",
            "\"form\"",
            "\"theme\"",
            "\"nav\"",
            "\"reveal\"",
            "\"scroll\"",
            "\"logging\"",
        ] {
            assert!(json.contains(section), "missing {section}");
        }
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn load_config_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        std::fs::write(&path, "[nav]\nscroll_threshold = 80.0\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert!((config.nav.scroll_threshold - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn load_config_replaces_invalid_values_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        std::fs::write(&path, "[form]\nerror_font_size = \"1rem; display: none\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.form.error_font_size, "0.875rem");
    }

    #[test]
    fn load_config_missing_explicit_path_is_error() {
        let err = load_config(Some(Path::new("/tmp/fonixx-missing/site.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }
}
