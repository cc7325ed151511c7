use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Problems translating traffic from the page into typed events.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("unknown page event: {0}")]
    UnknownEvent(String),

    #[error("malformed {kind} payload: {reason}")]
    MalformedPayload { kind: String, reason: String },

    #[error("page bridge error: {0}")]
    Bridge(String),
}

#[derive(Debug, thiserror::Error)]
pub enum FonixxError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Page(#[from] PageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("webview error: {0}")]
    WebView(String),

    #[error("{0}")]
    Other(String),
}
