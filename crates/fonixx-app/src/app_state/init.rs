//! Window creation and webview setup.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use fonixx_common::FonixxError;
use fonixx_config::FonixxConfig;
use fonixx_webview::bridge::bridge_script;
use fonixx_webview::{ContentProvider, WebViewConfig, WebViewManager};

use super::bounds::window_rect;
use super::core::FonixxApp;
use super::types::SITE_DIR;

/// Where the site's assets live: `--site`, then `site.assets_dir`, then
/// `assets/site` under the working directory, then under the workspace.
pub fn resolve_site_dir(cli: Option<&Path>, config: &FonixxConfig) -> PathBuf {
    if let Some(dir) = cli {
        return dir.to_path_buf();
    }
    if let Some(dir) = &config.site.assets_dir {
        return PathBuf::from(dir);
    }
    let local = std::env::current_dir().unwrap_or_default().join(SITE_DIR);
    if local.is_dir() {
        return local;
    }
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join(SITE_DIR)
}

impl FonixxApp {
    /// Create the window and the site webview.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        if let Err(e) = self.initialize_webview(&window) {
            tracing::error!("Failed to create webview: {e}");
            return false;
        }

        self.window = Some(window);
        tracing::info!("Window created and webview initialized");
        true
    }

    fn initialize_webview(
        &mut self,
        window: &Arc<winit::window::Window>,
    ) -> fonixx_common::Result<()> {
        if !self.site_dir.is_dir() {
            tracing::warn!(
                path = %self.site_dir.display(),
                "Site directory not found: every page request will 404"
            );
        }

        let provider = ContentProvider::new(&self.site_dir).with_index(self.start_page.clone());
        let mut manager = WebViewManager::new();
        manager.set_content_provider(provider);

        let mut config = WebViewConfig::for_page(&self.start_page)
            .with_init_script(bridge_script(&self.config));
        config.devtools = config.devtools || self.config.window.devtools;

        let handle = manager
            .create(&**window, window_rect(window.inner_size()), config)
            .map_err(|e| FonixxError::WebView(e.to_string()))?;

        tracing::info!(url = %handle.current_url(), "site webview created");
        self.manager = Some(manager);
        self.webview = Some(handle);
        Ok(())
    }
}
