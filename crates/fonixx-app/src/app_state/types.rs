//! Internal constants for the app state module.

use std::time::Duration;

/// How often to drain webview events (approx 60 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Site directory relative to the working directory or workspace root.
pub(super) const SITE_DIR: &str = "assets/site";
