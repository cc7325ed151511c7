//! Scroll-reveal configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub enabled: bool,
    /// Elements hidden at load and revealed on first intersection.
    pub selectors: Vec<String>,
    /// Visible fraction that counts as intersecting (valid range: 0.0-1.0).
    pub threshold: f64,
    /// Observer root margin, CSS shorthand.
    pub root_margin: String,
    /// CSS `animation` applied on reveal.
    pub animation: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            selectors: vec![
                ".card".into(),
                ".section-title".into(),
                ".hero-content".into(),
            ],
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".into(),
            animation: "fadeInUp 0.8s ease forwards".into(),
        }
    }
}
