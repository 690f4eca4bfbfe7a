//! Tracing setup.
//!
//! The terminal is owned by the UI, so log output goes to a file instead of
//! stderr. The filter comes from `RUST_LOG` and defaults to `info`.

use color_eyre::eyre::{eyre, Result, WrapErr};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "blogview.log";

/// Default log location: `<cache dir>/blogview/blogview.log`.
///
/// Falls back to the system temp directory when no cache dir is known.
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("blogview")
        .join(LOG_FILE_NAME)
}

/// Open (append) the log file, creating parent directories.
pub fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("creating log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("opening log file {}", path.display()))
}

/// Install the global tracing subscriber writing to `path`.
pub fn init_logging(path: &Path) -> Result<()> {
    let file = open_log_file(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| eyre!("failed to install tracing subscriber: {}", e))?;

    tracing::info!(log_path = %path.display(), "logging initialized");
    Ok(())
}
