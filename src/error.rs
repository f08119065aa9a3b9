use std::process::ExitStatus;
use thiserror::Error;

use crate::constants::exit_codes;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to serialize or parse JSON. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Target folder '{target_dir}' not empty, aborting...")]
    TargetDirectoryNotEmpty { target_dir: String },

    /// When the command has executed but finished with an error.
    #[error("Command '{command}' failed with status: {status}{}", format_stderr(.stderr))]
    CommandFailed { command: String, status: ExitStatus, stderr: String },

    /// The formatter rejected the source, usually a syntax error in the template.
    #[error("Failed to format '{path}': {message}")]
    FormatError { path: String, message: String },

    #[error("Cannot run formatter '{program}'. Original error: {e}")]
    FormatterUnavailable { program: String, e: std::io::Error },

    #[error("Cannot encode '{path}' as {encoding}: {reason}.")]
    EncodingError { path: String, encoding: String, reason: String },

    #[error("Template expects {expected} substitution values, got {actual}.")]
    TemplateArityError { expected: usize, actual: usize },

    #[error("Cannot patch manifest '{path}': {reason}.")]
    ManifestError { path: String, reason: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn format_stderr(stderr: &str) -> String {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        String::new()
    } else {
        format!("\n{stderr}")
    }
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with a non-zero status code.
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(exit_codes::FAILURE);
}
