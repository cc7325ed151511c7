//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop: one window, one webview, and the site behaviors behind it.

mod bounds;
mod core;
mod event_handler;
mod init;
mod ipc_dispatch;
mod polling;
mod types;

pub use core::FonixxApp;
pub use init::resolve_site_dir;
