use serde_json::json;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use ts_wp_init::command::{CommandOutput, CommandRunner};
use ts_wp_init::error::{Error, Result};
use ts_wp_init::format::CodeFormatter;
use walkdir::WalkDir;

/// Stands in for the package manager: `init` writes a minimal manifest,
/// everything else is recorded and succeeds unless it matches `fail_on`.
#[derive(Default)]
pub struct FakePackageManager {
    pub commands: RefCell<Vec<String>>,
    pub fail_on: Option<String>,
}

impl FakePackageManager {
    pub fn failing_on(command_prefix: &str) -> Self {
        Self { commands: RefCell::new(Vec::new()), fail_on: Some(command_prefix.to_string()) }
    }
}

impl CommandRunner for FakePackageManager {
    fn run(&self, command: &str, cwd: &Path) -> Result<CommandOutput> {
        self.commands.borrow_mut().push(command.to_string());
        if let Some(prefix) = &self.fail_on {
            if command.starts_with(prefix.as_str()) {
                return Err(Error::Other(anyhow::anyhow!("'{command}' exited with status 1")));
            }
        }
        if command.ends_with("init --yes") {
            let name = cwd.file_name().unwrap().to_string_lossy().into_owned();
            let manifest = json!({
                "name": name,
                "version": "1.0.0",
                "main": "index.js",
                "license": "MIT",
            });
            fs::write(cwd.join("package.json"), serde_json::to_string_pretty(&manifest)?)?;
        }
        Ok(CommandOutput { stdout: format!("ran {command}\n"), stderr: String::new() })
    }
}

/// Marks formatted files so tests can tell them apart, without reindenting.
#[derive(Default)]
pub struct MarkingFormatter {
    pub seen: RefCell<Vec<PathBuf>>,
}

impl CodeFormatter for MarkingFormatter {
    fn format(&self, source: &str, path: &Path) -> Result<String> {
        self.seen.borrow_mut().push(path.to_path_buf());
        Ok(format!("// formatted\n{}", ts_wp_init::deindent::deindent(source).trim()))
    }
}

/// Relative paths of every file below `root`, sorted.
pub fn list_files(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            entry.path().strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/")
        })
        .collect();
    files.sort();
    files
}
