//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the viewer, optionally against a different application root
    RunTui { app_root: Option<String> },
    /// Arguments could not be understood
    Invalid(String),
}

/// Parse command-line arguments and return the appropriate command.
///
/// The first element is the program name and is skipped.
///
/// ```
/// use blogview::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["blogview".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut app_root: Option<String> = None;
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--root" | "-r" => match args.next() {
                Some(root) => app_root = Some(root),
                None => return CliCommand::Invalid(format!("{} requires a URL", arg)),
            },
            other if other.starts_with("--root=") => {
                app_root = Some(other["--root=".len()..].to_string());
            }
            other if other.starts_with('-') => {
                return CliCommand::Invalid(format!("unknown option '{}'", other));
            }
            other => {
                if app_root.is_some() {
                    return CliCommand::Invalid(format!("unexpected argument '{}'", other));
                }
                app_root = Some(other.to_string());
            }
        }
    }

    CliCommand::RunTui { app_root }
}
