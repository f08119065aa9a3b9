/// Handles argument parsing.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Constants shared across modules.
pub mod constants;

/// Label/message progress output.
pub mod console;

/// Runs external shell commands.
pub mod command;

/// Strips template indentation.
pub mod deindent;

/// External source code formatting.
pub mod format;

/// Writes generated files.
pub mod writer;

/// Package lists and file contents of the generated projects.
pub mod preset;

/// Ordered execution of generation steps.
pub mod scaffold;
