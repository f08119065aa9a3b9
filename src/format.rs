use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::constants::DEFAULT_FORMATTER;
use crate::error::{Error, Result};

/// Trait for source code formatters.
pub trait CodeFormatter {
    /// Reformats `source`.
    ///
    /// # Arguments
    /// * `source` - Source text to format
    /// * `path` - Target path, used only to infer the language from its extension
    ///
    /// # Returns
    /// * `Result<String>` - Formatted source, or an error when the source does not parse
    fn format(&self, source: &str, path: &Path) -> Result<String>;
}

/// Trailing comma policy understood by prettier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingComma {
    None,
    Es5,
    All,
}

impl TrailingComma {
    fn as_str(self) -> &'static str {
        match self {
            TrailingComma::None => "none",
            TrailingComma::Es5 => "es5",
            TrailingComma::All => "all",
        }
    }
}

/// Parentheses policy for single-argument arrow functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowParens {
    Avoid,
    Always,
}

impl ArrowParens {
    fn as_str(self) -> &'static str {
        match self {
            ArrowParens::Avoid => "avoid",
            ArrowParens::Always => "always",
        }
    }
}

/// Style used for generated sources.
///
/// The same structure is written to the generated project's `.prettierrc`,
/// so the editor keeps formatting files the way they were emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrettierOptions {
    pub tab_width: u8,
    pub bracket_spacing: bool,
    pub print_width: u16,
    pub semi: bool,
    pub single_quote: bool,
    pub trailing_comma: TrailingComma,
    pub arrow_parens: ArrowParens,
    pub use_tabs: bool,
}

impl Default for PrettierOptions {
    fn default() -> Self {
        Self {
            tab_width: 2,
            bracket_spacing: true,
            print_width: 80,
            semi: true,
            single_quote: true,
            trailing_comma: TrailingComma::All,
            arrow_parens: ArrowParens::Avoid,
            use_tabs: false,
        }
    }
}

impl PrettierOptions {
    /// Command line flags equivalent to these options.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "--tab-width".to_string(),
            self.tab_width.to_string(),
            "--print-width".to_string(),
            self.print_width.to_string(),
            "--trailing-comma".to_string(),
            self.trailing_comma.as_str().to_string(),
            "--arrow-parens".to_string(),
            self.arrow_parens.as_str().to_string(),
        ];
        if !self.bracket_spacing {
            args.push("--no-bracket-spacing".into());
        }
        if !self.semi {
            args.push("--no-semi".into());
        }
        if self.single_quote {
            args.push("--single-quote".into());
        }
        if self.use_tabs {
            args.push("--use-tabs".into());
        }
        args
    }
}

/// Formats sources by piping them through the `prettier` executable.
#[derive(Debug, Clone)]
pub struct Prettier {
    program: PathBuf,
    options: PrettierOptions,
}

impl Prettier {
    pub fn new<P: Into<PathBuf>>(program: P, options: PrettierOptions) -> Self {
        Self { program: program.into(), options }
    }
}

impl Default for Prettier {
    fn default() -> Self {
        Self::new(DEFAULT_FORMATTER, PrettierOptions::default())
    }
}

impl CodeFormatter for Prettier {
    fn format(&self, source: &str, path: &Path) -> Result<String> {
        let program = self.program.display().to_string();
        log::debug!("Formatting '{}' with {program}", path.display());

        let mut child = Command::new(&self.program)
            .arg("--stdin-filepath")
            .arg(path)
            .args(self.options.to_args())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::FormatterUnavailable { program: program.clone(), e })?;

        // Write the source and close stdin to signal end of input
        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(source.as_bytes()) {
                if e.kind() == std::io::ErrorKind::BrokenPipe {
                    log::debug!("{program} closed stdin early (broken pipe)");
                } else {
                    return Err(Error::IoError(e));
                }
            }
        }

        let output = child.wait_with_output()?;

        if !output.status.success() {
            return Err(Error::FormatError {
                path: path.display().to_string(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|e| Error::FormatError {
            path: path.display().to_string(),
            message: format!("formatter produced invalid UTF-8: {e}"),
        })
    }
}
