//! FonixxApp struct definition and constructor.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use fonixx_behavior::Site;
use fonixx_config::FonixxConfig;
use fonixx_webview::{BridgePage, WebViewHandle, WebViewManager};

pub struct FonixxApp {
    pub(super) config: FonixxConfig,
    pub(super) site_dir: PathBuf,
    pub(super) start_page: String,

    pub(super) window: Option<Arc<Window>>,
    pub(super) manager: Option<WebViewManager>,
    pub(super) webview: Option<WebViewHandle>,

    /// Behaviors for whatever page the webview currently shows.
    pub(super) site: Site<BridgePage>,

    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl FonixxApp {
    pub fn new(config: FonixxConfig, site_dir: PathBuf, start_page: String) -> Self {
        let site = Site::init(&config, BridgePage::new());
        Self {
            config,
            site_dir,
            start_page,
            window: None,
            manager: None,
            webview: None,
            site,
            should_exit: false,
            last_poll: Instant::now(),
        }
    }
}
