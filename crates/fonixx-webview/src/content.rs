//! Site assets served over the `fonixx://` custom protocol.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::warn;
use wry::http::header::CONTENT_TYPE;
use wry::http::{Response, StatusCode};

/// Scheme the site is served under.
pub const SCHEME: &str = "fonixx";

/// Serves files from a site directory.
///
/// `fonixx://localhost/about.html` resolves to `{base_dir}/about.html`.
/// Directory requests get the index page.
pub struct ContentProvider {
    base_dir: PathBuf,
    index: String,
    overrides: HashMap<String, (String, Vec<u8>)>,
}

impl ContentProvider {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            index: "index.html".into(),
            overrides: HashMap::new(),
        }
    }

    /// Page served for `/` and other directory paths.
    pub fn with_index(mut self, index: impl Into<String>) -> Self {
        self.index = index.into();
        self
    }

    /// Serve `data` at `path` instead of anything on disk.
    pub fn add_override(
        &mut self,
        path: impl Into<String>,
        mime: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) {
        self.overrides
            .insert(path.into(), (mime.into(), data.into()));
    }

    /// Resolve a request path to its MIME type and bytes.
    pub fn resolve(&self, path: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let clean = path.trim_start_matches('/');
        let clean = if clean.is_empty() || clean.ends_with('/') {
            Cow::Owned(format!("{clean}{}", self.index))
        } else {
            Cow::Borrowed(clean)
        };

        if let Some((mime, data)) = self.overrides.get(&*clean) {
            return Some((Cow::Borrowed(mime.as_str()), Cow::Borrowed(data.as_slice())));
        }

        let file_path = self.base_dir.join(&*clean);

        // Canonicalize both sides so `..` and symlinks cannot escape the base.
        let canonical_base = std::fs::canonicalize(&self.base_dir).ok()?;
        let canonical_file = std::fs::canonicalize(&file_path).ok()?;
        if !canonical_file.starts_with(&canonical_base) {
            return None;
        }

        let data = std::fs::read(&canonical_file).ok()?;
        Some((
            Cow::Borrowed(mime_from_extension(&file_path)),
            Cow::Owned(data),
        ))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Build the protocol response for a request path.
    pub fn respond(&self, path: &str) -> Response<Cow<'static, [u8]>> {
        match self.resolve(path) {
            Some((mime, data)) => response(StatusCode::OK, &mime, data.into_owned()),
            None => {
                warn!(path = %path, "custom protocol: asset not found");
                response(StatusCode::NOT_FOUND, "text/plain", b"Not Found".to_vec())
            }
        }
    }
}

fn response(status: StatusCode, mime: &str, body: Vec<u8>) -> Response<Cow<'static, [u8]>> {
    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, mime)
        .body(Cow::Owned(body))
        .unwrap_or_else(|e| {
            warn!(error = %e, mime, "custom protocol: invalid response header");
            let mut fallback = Response::new(Cow::Borrowed(&b""[..]));
            *fallback.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        })
}

fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}
