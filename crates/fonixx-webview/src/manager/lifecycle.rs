use std::sync::Arc;

use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::content::{ContentProvider, SCHEME};
use crate::ipc::IPC_INIT_SCRIPT;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create the site webview as a child of `window`, positioned at `bounds`.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_devtools(config.devtools)
            .with_initialization_script(IPC_INIT_SCRIPT);

        for script in &config.init_scripts {
            builder = builder.with_initialization_script(script);
        }

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(&self.events));
        builder = Self::attach_page_load_handler(builder, Arc::clone(&self.events));
        builder = Self::attach_title_handler(builder, Arc::clone(&self.events));
        builder = Self::attach_navigation_handler(builder, Arc::clone(&self.events));
        builder = self.attach_custom_protocol(builder);

        let webview = builder.with_url(&config.url).build_as_child(window)?;

        debug!(url = %config.url, "webview created");

        Ok(WebViewHandle {
            webview,
            current_url: config.url,
        })
    }

    /// Serve `fonixx://` requests from `provider`.
    pub fn set_content_provider(&mut self, provider: ContentProvider) {
        self.content_provider = Some(Arc::new(provider));
    }

    fn attach_custom_protocol<'a>(&self, mut builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        if let Some(provider) = &self.content_provider {
            let cp = Arc::clone(provider);
            builder = builder.with_custom_protocol(SCHEME.to_string(), move |_wv_id, request| {
                cp.respond(request.uri().path())
            });
        }
        builder
    }
}
