//! IPC between the page and Rust.
//!
//! - **Page -> Rust**: the page calls `window.fonixx.ipc.send(kind, payload)`,
//!   which posts `{"kind", "payload"}` JSON to the webview's IPC handler.
//! - **Rust -> page**: Rust evaluates `window.fonixx.ipc._dispatch(kind, payload)`,
//!   which calls the handler the page registered with `on(kind, ...)`.

use fonixx_common::{DomCommand, PageError, PageEvent};
use serde::{Deserialize, Serialize};

/// Handler kind the page bridge registers for DOM command batches.
pub const DOM_KIND: &str = "dom";

/// The envelope every page message arrives in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpcMessage {
    pub kind: String,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl IpcMessage {
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    pub fn into_event(self) -> Result<PageEvent, PageError> {
        let value = serde_json::json!({ "kind": self.kind, "payload": self.payload });
        PageEvent::from_value(value)
    }
}

/// Sets up `window.fonixx.ipc`. Injected before any page script runs.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    window.fonixx = window.fonixx || {};
    window.fonixx.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        },
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

/// JS that hands `payload` to the page handler registered for `kind`.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.fonixx.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}

/// JS that applies a batch of DOM commands in order.
pub fn js_dom_commands(commands: &[DomCommand]) -> Result<String, serde_json::Error> {
    let payload = serde_json::to_value(commands)?;
    Ok(js_dispatch_message(DOM_KIND, &payload))
}
