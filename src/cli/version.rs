//! Version and usage output.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One-line version string printed by `--version`.
pub fn version_line() -> String {
    format!("blogview {}", VERSION)
}

/// Usage text printed by `--help`.
pub fn usage() -> String {
    format!(
        "{}\n\n\
         Usage: blogview [--root <URL> | <URL>]\n\n\
         Loads <URL>/people.json and shows its authors, posts and categories.\n\n\
         Options:\n  \
           -r, --root <URL>  Application root (default: {})\n  \
           -V, --version     Print version and exit\n  \
           -h, --help        Print this help and exit\n\n\
         Keys: q quit, arrows or j/k scroll, PgUp/PgDn page, g/G top/bottom\n\
         Logs go to {} (filter with RUST_LOG)",
        version_line(),
        crate::config::DEFAULT_APP_ROOT,
        crate::logging::default_log_path().display(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_line() {
        assert_eq!(version_line(), format!("blogview {}", VERSION));
    }

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }

    #[test]
    fn test_usage_mentions_flags() {
        let text = usage();
        assert!(text.contains("--root"));
        assert!(text.contains("--version"));
        assert!(text.contains("people.json"));
    }
}
