//! Color configuration for generated page elements.

use serde::{Deserialize, Serialize};

/// Colors used by annotations and the success notice.
///
/// Values must be `#RGB`, `#RRGGBB`, `#RRGGBBAA`, or `rgba(...)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Annotation text and invalid-field border color.
    pub error: String,
    pub notice_gradient_start: String,
    pub notice_gradient_end: String,
    pub notice_text: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            error: "#ff6b6b".into(),
            notice_gradient_start: "#D4AF37".into(),
            notice_gradient_end: "#F0D878".into(),
            notice_text: "#000".into(),
        }
    }
}
