use crate::{
    constants::{verbosity, DEFAULT_FORMATTER},
    preset::{PackageManager, Preset},
    scaffold::ScaffoldOptions,
};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for ts-wp-init.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to initialize (created if missing, must be empty). Defaults to the current directory.
    #[arg(value_name = "TARGET_DIR")]
    pub target_dir: Option<PathBuf>,

    /// Increase verbosity (`-v`, `-vv`, `-vvv`). Also echoes command output.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Echo stderr of the package manager commands.
    #[arg(long)]
    pub stderr: bool,

    /// Flavour of the generated project.
    #[arg(short, long, value_enum, default_value_t = Preset::default())]
    pub preset: Preset,

    /// Package manager used to create the manifest and install dependencies.
    #[arg(long = "package-manager", value_enum, default_value_t = PackageManager::default())]
    pub package_manager: PackageManager,

    /// Write sources as they are instead of running them through prettier.
    #[arg(long = "no-format")]
    pub no_format: bool,

    /// Prettier executable used for formatting.
    #[arg(long, value_name = "PROGRAM", default_value = DEFAULT_FORMATTER)]
    pub prettier: PathBuf,
}

impl Args {
    pub fn scaffold_options(&self) -> ScaffoldOptions {
        ScaffoldOptions {
            preset: self.preset,
            package_manager: self.package_manager,
            format: !self.no_format,
            show_stdout: self.verbose > verbosity::OFF,
            show_stderr: self.stderr,
        }
    }
}

/// Parse command line arguments.
pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
