use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};

use super::WebViewManager;

// =============================================================================
// NAVIGATION ALLOWLIST
// =============================================================================

/// URL prefixes the webview may navigate to. Everything else is blocked.
pub const ALLOWED_NAV_PREFIXES: &[&str] = &[
    "fonixx://",
    // WebView2 rewrites fonixx://localhost/… to http://fonixx.localhost/…
    "http://fonixx.localhost",
    "about:blank",
];

pub fn is_navigation_allowed(url: &str) -> bool {
    ALLOWED_NAV_PREFIXES
        .iter()
        .any(|prefix| url.starts_with(prefix))
}

/// Whether an IPC body is worth forwarding: it must be JSON.
pub fn is_valid_ipc_body(body: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(body).is_ok()
}

fn push(events: &Mutex<Vec<WebViewEvent>>, event: WebViewEvent) {
    if let Ok(mut evts) = events.lock() {
        evts.push(event);
    }
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            if !is_valid_ipc_body(&body) {
                warn!(body_len = body.len(), "IPC message rejected: invalid JSON");
                return;
            }

            debug!(body_len = body.len(), "IPC message from page");
            push(&events, WebViewEvent::IpcMessage { body });
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(?state, url = %url, "page load");
            push(&events, WebViewEvent::PageLoad { state, url });
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(title = %title, "title changed");
            push(&events, WebViewEvent::TitleChanged { title });
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if !is_navigation_allowed(&url) {
                warn!(url = %url, "navigation blocked: URL not in allowlist");
                return false;
            }

            debug!(url = %url, "navigation allowed");
            push(&events, WebViewEvent::NavigationRequested { url });
            true
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_site_protocol() {
        assert!(is_navigation_allowed("fonixx://localhost/index.html"));
        assert!(is_navigation_allowed("fonixx://localhost/services.html#contact"));
    }

    #[test]
    fn allows_webview2_rewritten_protocol() {
        assert!(is_navigation_allowed("http://fonixx.localhost/about.html"));
    }

    #[test]
    fn allows_about_blank() {
        assert!(is_navigation_allowed("about:blank"));
    }

    #[test]
    fn blocks_external_sites() {
        assert!(!is_navigation_allowed("https://example.com"));
        assert!(!is_navigation_allowed("http://localhost:8080"));
        assert!(!is_navigation_allowed("https://fonixx.localhost.evil.com"));
    }

    #[test]
    fn blocks_other_schemes() {
        assert!(!is_navigation_allowed("file:///etc/passwd"));
        assert!(!is_navigation_allowed("javascript:alert(1)"));
        assert!(!is_navigation_allowed("data:text/html,<h1>x</h1>"));
        assert!(!is_navigation_allowed("mailto:hello@fonixx.co"));
    }

    #[test]
    fn blocks_empty_and_garbage() {
        assert!(!is_navigation_allowed(""));
        assert!(!is_navigation_allowed("   "));
        assert!(!is_navigation_allowed("fonixx:"));
    }

    #[test]
    fn ipc_body_must_be_json() {
        assert!(is_valid_ipc_body(r#"{"kind":"scroll","payload":{"y":1}}"#));
        assert!(!is_valid_ipc_body("scroll"));
        assert!(!is_valid_ipc_body(""));
    }

    #[test]
    fn allowlist_has_expected_entries() {
        assert_eq!(ALLOWED_NAV_PREFIXES.len(), 3);
        assert!(ALLOWED_NAV_PREFIXES.contains(&"fonixx://"));
    }
}
