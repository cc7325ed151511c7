//! Webview host for the Fonixx site.
//!
//! Wraps `wry` to provide:
//! - One managed webview rendering the bundled site
//! - Bidirectional IPC (page events in, DOM commands out)
//! - The `fonixx://` custom protocol serving site assets
//! - A navigation allowlist
//! - [`BridgePage`], the `Page` the behavior layer drives

pub mod bridge;
pub mod content;
pub mod events;
pub mod ipc;
pub mod manager;
pub mod page;

pub use content::ContentProvider;
pub use events::{PageLoadState, WebViewEvent};
pub use ipc::IpcMessage;
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager};
pub use page::BridgePage;
