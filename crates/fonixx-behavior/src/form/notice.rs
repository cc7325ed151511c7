//! Transient success notice shown after a fully valid submission.

use std::time::Duration;

use fonixx_common::{DomCommand, Element, ElementId, Target};
use fonixx_config::FonixxConfig;

/// What the notice says, how it looks, and how long it lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeSpec {
    pub text: String,
    pub css: String,
    /// Time on screen before the fade starts.
    pub delay: Duration,
    /// Fade length; the element is removed when it ends.
    pub fade: Duration,
}

impl NoticeSpec {
    pub fn from_config(config: &FonixxConfig) -> Self {
        let theme = &config.theme;
        let css = format!(
            "background: linear-gradient(135deg, {} 0%, {} 100%); color: {}; \
             padding: 1rem; border-radius: 8px; margin-top: 1rem; text-align: center; \
             font-weight: 600; animation: fadeInUp 0.5s ease;",
            theme.notice_gradient_start, theme.notice_gradient_end, theme.notice_text
        );
        Self {
            text: config.form.notice_text.clone(),
            css,
            delay: Duration::from_millis(config.form.notice_delay_ms),
            fade: Duration::from_millis(config.form.notice_fade_ms),
        }
    }

    pub(crate) fn element(&self, id: ElementId) -> Element {
        Element {
            id,
            class: "success-message".into(),
            text: self.text.clone(),
            css: self.css.clone(),
        }
    }

    fn fade_animation(&self) -> String {
        format!("fadeOut {}s ease", self.fade.as_secs_f64())
    }
}

impl Default for NoticeSpec {
    fn default() -> Self {
        Self::from_config(&FonixxConfig::default())
    }
}

/// Deferred steps of a notice's life.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeTask {
    Fade(ElementId),
    Remove(ElementId),
}

impl NoticeTask {
    pub(crate) fn command(self, spec: &NoticeSpec) -> DomCommand {
        match self {
            Self::Fade(id) => DomCommand::set_style(
                Target::id(id.as_str()),
                "animation",
                spec.fade_animation(),
            ),
            Self::Remove(id) => DomCommand::Remove { id },
        }
    }
}
