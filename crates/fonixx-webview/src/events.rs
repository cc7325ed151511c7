//! WebView event types.

use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    Started,
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events pushed by webview callbacks for the event loop to drain.
#[derive(Debug, Clone, PartialEq)]
pub enum WebViewEvent {
    PageLoad { state: PageLoadState, url: String },
    TitleChanged { title: String },
    /// Raw IPC body posted by the page. Already checked to be JSON.
    IpcMessage { body: String },
    /// An allowed navigation is starting.
    NavigationRequested { url: String },
}
