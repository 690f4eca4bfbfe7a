//! CLI module.
//!
//! Flags are handled before the terminal is touched:
//!
//! ```ignore
//! use blogview::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args()) {
//!     CliCommand::Version => println!("{}", blogview::cli::version_line()),
//!     CliCommand::RunTui { app_root } => { /* start the viewer */ }
//!     _ => {}
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{usage, version_line, VERSION};

use crate::config::AppConfig;

/// Build the session configuration for a `RunTui` command.
pub fn config_for(app_root: Option<String>) -> AppConfig {
    match app_root {
        Some(root) => AppConfig::default().with_app_root(root),
        None => AppConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_APP_ROOT;

    #[test]
    fn test_config_for_default() {
        assert_eq!(config_for(None).app_root, DEFAULT_APP_ROOT);
    }

    #[test]
    fn test_config_for_override() {
        let config = config_for(Some("http://blog.local".to_string()));
        assert_eq!(config.document_url(), "http://blog.local/people.json");
    }
}
