use fonixx_common::DomCommand;
use tracing::warn;
use wry::WebView;

/// The live site webview.
pub struct WebViewHandle {
    pub(super) webview: WebView,
    pub(super) current_url: String,
}

impl WebViewHandle {
    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    /// Apply a batch of DOM commands in one script evaluation.
    pub fn apply_commands(&self, commands: &[DomCommand]) -> Result<(), wry::Error> {
        if commands.is_empty() {
            return Ok(());
        }
        match crate::ipc::js_dom_commands(commands) {
            Ok(script) => self.webview.evaluate_script(&script),
            Err(e) => {
                warn!(error = %e, count = commands.len(), "failed to encode dom commands");
                Ok(())
            }
        }
    }

    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    pub fn set_url(&mut self, url: String) {
        self.current_url = url;
    }
}
