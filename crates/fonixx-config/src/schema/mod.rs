//! Configuration schema types for the Fonixx site host.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the values the live site ships with.

mod form;
mod logging;
mod nav;
mod reveal;
mod scroll;
mod theme;
mod window;

pub use form::*;
pub use logging::*;
pub use nav::*;
pub use reveal::*;
pub use scroll::*;
pub use theme::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct FonixxConfig {
    pub site: SiteConfig,
    pub window: WindowConfig,
    pub form: FormConfig,
    pub theme: ThemeConfig,
    pub nav: NavConfig,
    pub reveal: RevealConfig,
    pub scroll: ScrollConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fonixx_common::{ScrollBehavior, ScrollBlock};

    #[test]
    fn default_form_matches_live_site() {
        let config = FonixxConfig::default();
        assert_eq!(config.form.selector, ".contact-form");
        assert_eq!(
            config.form.notice_text,
            "\u{2713} Thank you! We will contact you soon."
        );
        assert_eq!(config.form.notice_delay_ms, 5000);
        assert_eq!(config.form.notice_fade_ms, 500);
        assert_eq!(config.form.error_font_size, "0.875rem");
        assert_eq!(config.form.error_margin_top, "0.25rem");
    }

    #[test]
    fn default_theme_colors() {
        let config = FonixxConfig::default();
        assert_eq!(config.theme.error, "#ff6b6b");
        assert_eq!(config.theme.notice_gradient_start, "#D4AF37");
        assert_eq!(config.theme.notice_gradient_end, "#F0D878");
        assert_eq!(config.theme.notice_text, "#000");
    }

    #[test]
    fn default_nav() {
        let config = FonixxConfig::default();
        assert!((config.nav.scroll_threshold - 50.0).abs() < f64::EPSILON);
        assert_eq!(config.nav.open_icon, "\u{2715}");
        assert_eq!(config.nav.closed_icon, "\u{2630}");
        assert_eq!(config.nav.default_page, "index.html");
    }

    #[test]
    fn default_reveal() {
        let config = FonixxConfig::default();
        assert!(config.reveal.enabled);
        assert_eq!(
            config.reveal.selectors,
            vec![".card", ".section-title", ".hero-content"]
        );
        assert!((config.reveal.threshold - 0.1).abs() < f64::EPSILON);
        assert_eq!(config.reveal.root_margin, "0px 0px -50px 0px");
        assert_eq!(config.reveal.animation, "fadeInUp 0.8s ease forwards");
    }

    #[test]
    fn default_scroll_is_smooth_to_start() {
        let config = FonixxConfig::default();
        assert_eq!(config.scroll.behavior, ScrollBehavior::Smooth);
        assert_eq!(config.scroll.block, ScrollBlock::Start);
    }

    #[test]
    fn default_site_and_window() {
        let config = FonixxConfig::default();
        assert!(config.site.assets_dir.is_none());
        assert_eq!(config.site.start_page, "index.html");
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.window.height, 800);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_toml_deserializes_with_defaults() {
        let toml_str = r##"
[form]
notice_delay_ms = 3000

[theme]
error = "#ff0000"

[scroll]
behavior = "instant"
block = "center"
"##;
        let config: FonixxConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.form.notice_delay_ms, 3000);
        assert_eq!(config.form.notice_fade_ms, 500);
        assert_eq!(config.theme.error, "#ff0000");
        assert_eq!(config.theme.notice_text, "#000");
        assert_eq!(config.scroll.behavior, ScrollBehavior::Instant);
        assert_eq!(config.scroll.block, ScrollBlock::Center);
        assert_eq!(config.nav.default_page, "index.html");
    }

    #[test]
    fn empty_toml_is_default() {
        let config: FonixxConfig = toml::from_str("").unwrap();
        assert_eq!(config.window.title, "Fonixx Consultancy");
        assert_eq!(config.reveal.selectors.len(), 3);
    }

    #[test]
    fn log_level_parses_uppercase() {
        let config: FonixxConfig = toml::from_str("[logging]\nlevel = \"DEBUG\"\n").unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.level.directive(), "fonixx=debug");
    }
}
