//! IPC message validation and dispatch from the page to the site behaviors.

use std::time::Instant;

use fonixx_behavior::Handled;
use fonixx_common::{PageError, PageEvent};
use fonixx_webview::IpcMessage;

use super::core::FonixxApp;

// =============================================================================
// IPC ALLOWLIST
// =============================================================================

/// Any message with a `kind` not in this list is rejected and logged.
const ALLOWED_IPC_KINDS: &[&str] = PageEvent::KINDS;

pub fn is_ipc_kind_allowed(kind: &str) -> bool {
    ALLOWED_IPC_KINDS.contains(&kind)
}

/// Turn a raw IPC body into a page event.
pub fn decode_ipc(body: &str) -> Result<PageEvent, PageError> {
    let msg = IpcMessage::from_json(body)
        .ok_or_else(|| PageError::Bridge("not an IPC envelope".to_string()))?;
    if !is_ipc_kind_allowed(&msg.kind) {
        return Err(PageError::UnknownEvent(msg.kind));
    }
    msg.into_event()
}

// =============================================================================
// DISPATCH
// =============================================================================

impl FonixxApp {
    /// Handle a single IPC message from the webview.
    pub(super) fn handle_ipc_message(&mut self, body: &str, now: Instant) {
        let event = match decode_ipc(body) {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!(body_len = body.len(), error = %e, "IPC message rejected");
                return;
            }
        };

        tracing::debug!(kind = event.kind(), "IPC message dispatched");

        match self.site.handle(&event, now) {
            Ok(Handled::Submitted(outcome)) => {
                tracing::info!(
                    valid = outcome.all_valid,
                    failed = outcome.failed_fields().len(),
                    "contact form checked"
                );
            }
            Ok(Handled::Applied) | Ok(Handled::Ignored) => {}
            Err(e) => {
                tracing::warn!(kind = event.kind(), error = %e, "page event rejected");
            }
        }

        self.flush_commands();
    }
}

// =============================================================================
// TESTS
// =============================================================================
