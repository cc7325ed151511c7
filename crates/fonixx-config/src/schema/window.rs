//! Host window and bundled site configuration.

use serde::{Deserialize, Serialize};

/// Desktop window that hosts the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial width in logical pixels (valid range: 320-7680).
    pub width: u32,
    /// Initial height in logical pixels (valid range: 240-4320).
    pub height: u32,
    /// Enable webview dev tools (always on in debug builds).
    pub devtools: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Fonixx Consultancy".into(),
            width: 1280,
            height: 800,
            devtools: false,
        }
    }
}

/// Where the site's HTML/CSS lives and which page opens first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Asset directory; `None` uses the bundled `assets/site`.
    pub assets_dir: Option<String>,
    pub start_page: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            assets_dir: None,
            start_page: "index.html".into(),
        }
    }
}
