//! Navigation bar configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Scroll offset (px) past which the navbar is marked `scrolled` (valid range: 0-2000).
    pub scroll_threshold: f64,
    /// Icon shown on the toggle while the mobile menu is open.
    pub open_icon: String,
    /// Icon shown on the toggle while the mobile menu is closed.
    pub closed_icon: String,
    /// Page treated as current when the path has no file name.
    pub default_page: String,
    pub navbar_selector: String,
    pub menu_selector: String,
    pub toggle_selector: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 50.0,
            open_icon: "\u{2715}".into(),
            closed_icon: "\u{2630}".into(),
            default_page: "index.html".into(),
            navbar_selector: ".navbar".into(),
            menu_selector: ".nav-menu".into(),
            toggle_selector: ".mobile-menu-toggle".into(),
        }
    }
}
