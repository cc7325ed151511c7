//! Contact form feedback configuration.

use serde::{Deserialize, Serialize};

/// Success notice and inline error settings for the contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// CSS selector of the contact form.
    pub selector: String,
    /// Text of the success notice.
    pub notice_text: String,
    /// How long the success notice stays before fading (valid range: 500-60000 ms).
    pub notice_delay_ms: u64,
    /// Length of the fade-out before removal (valid range: 0-5000 ms).
    pub notice_fade_ms: u64,
    /// Font size of inline error annotations (a plain CSS length).
    pub error_font_size: String,
    /// Top margin of inline error annotations (a plain CSS length).
    pub error_margin_top: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            selector: ".contact-form".into(),
            notice_text: "\u{2713} Thank you! We will contact you soon.".into(),
            notice_delay_ms: 5000,
            notice_fade_ms: 500,
            error_font_size: "0.875rem".into(),
            error_margin_top: "0.25rem".into(),
        }
    }
}
