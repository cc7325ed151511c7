/// How to build the site webview.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL, normally `fonixx://localhost/<page>`.
    pub url: String,
    pub devtools: bool,
    pub user_agent: Option<String>,
    /// Scripts injected after the IPC bridge, before page scripts.
    pub init_scripts: Vec<String>,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: "fonixx://localhost/index.html".to_string(),
            devtools: cfg!(debug_assertions),
            user_agent: Some(format!("Fonixx/{}", env!("CARGO_PKG_VERSION"))),
            init_scripts: Vec::new(),
        }
    }
}

impl WebViewConfig {
    /// Load `page` from the site served over `fonixx://`.
    pub fn for_page(page: &str) -> Self {
        Self {
            url: format!("fonixx://localhost/{}", page.trim_start_matches('/')),
            ..Default::default()
        }
    }

    pub fn with_init_script(mut self, script: impl Into<String>) -> Self {
        self.init_scripts.push(script.into());
        self
    }
}
