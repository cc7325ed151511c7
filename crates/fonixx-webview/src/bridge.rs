//! The script that connects a loaded page to the behavior layer.

use fonixx_config::{config_to_json, FonixxConfig};

const BRIDGE_JS: &str = include_str!("bridge.js");

/// Page bridge for `config`: the config as `window.__FONIXX_CONFIG__`,
/// then the bridge itself. Runs after [`crate::ipc::IPC_INIT_SCRIPT`].
pub fn bridge_script(config: &FonixxConfig) -> String {
    format!(
        "window.__FONIXX_CONFIG__ = {};\n{}",
        config_to_json(config),
        BRIDGE_JS
    )
}
