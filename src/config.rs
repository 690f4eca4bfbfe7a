//! Runtime configuration.
//!
//! The document location is fixed relative to the application root; only
//! the root itself (and a couple of ambient settings) can change.

use std::path::PathBuf;
use std::time::Duration;

/// Path of the blog document, relative to the application root.
pub const DOCUMENT_PATH: &str = "/people.json";

/// Application root used when none is given on the command line.
pub const DEFAULT_APP_ROOT: &str = "http://localhost:5173";

/// Default HTTP timeout for the document request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for one viewer session.
///
/// ```ignore
/// use blogview::config::AppConfig;
///
/// let config = AppConfig::default().with_app_root("http://blog.local/");
/// assert_eq!(config.document_url(), "http://blog.local/people.json");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Origin serving the static files
    pub app_root: String,
    /// Give up on the request after this long
    pub request_timeout: Duration,
    /// Where tracing output goes (None = default cache location)
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_root: DEFAULT_APP_ROOT.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            log_path: None,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_app_root(mut self, root: impl Into<String>) -> Self {
        self.app_root = root.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    /// Full URL of the blog document.
    pub fn document_url(&self) -> String {
        format!("{}{}", self.app_root.trim_end_matches('/'), DOCUMENT_PATH)
    }
}
