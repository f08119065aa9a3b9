//! Constants used throughout ts-wp-init

/// Width of the label column in console output
pub const LABEL_WIDTH: usize = 12;

/// Column at which console messages are wrapped
pub const WRAP_WIDTH: usize = 80;

/// Package manifest created by the package manager
pub const MANIFEST_FILE: &str = "package.json";

/// Script name added to the manifest
pub const START_SCRIPT_NAME: &str = "start";

/// Default formatter executable
pub const DEFAULT_FORMATTER: &str = "prettier";

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
