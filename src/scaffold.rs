use colored::Color;
use std::path::{Path, PathBuf};

use crate::{
    command::CommandRunner,
    console::Console,
    error::{Error, Result},
    format::CodeFormatter,
    preset::{PackageManager, Preset, Project},
    writer::{FileWriter, WriteRequest},
};

/// One unit of work in a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Runs a shell command inside the project directory.
    Execute(String),
    /// Creates a directory whose parent already exists.
    CreateDir(PathBuf),
    /// Writes a file.
    Write(WriteRequest),
    /// Writes a value as indented JSON.
    WriteJson { path: PathBuf, value: serde_json::Value },
    /// Adds or replaces an entry under `scripts` in the manifest.
    AddScript { manifest: PathBuf, name: String, command: String },
}

impl Step {
    /// Returns a brief description of this step for log and error messages.
    pub fn describe(&self) -> String {
        match self {
            Step::Execute(command) => format!("execute '{command}'"),
            Step::CreateDir(path) => format!("create directory '{}'", path.display()),
            Step::Write(request) => format!("write '{}'", request.path.display()),
            Step::WriteJson { path, .. } => format!("write JSON '{}'", path.display()),
            Step::AddScript { manifest, name, .. } => {
                format!("add '{name}' script to '{}'", manifest.display())
            }
        }
    }
}

/// Settings of a generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScaffoldOptions {
    pub preset: Preset,
    pub package_manager: PackageManager,
    /// Run JS/TS sources through the code formatter.
    pub format: bool,
    /// Echo the stdout of executed commands.
    pub show_stdout: bool,
    /// Echo the stderr of executed commands.
    pub show_stderr: bool,
}

/// Ensures the target directory exists and is empty.
///
/// A missing directory is created. An existing directory with any entry in
/// it aborts the run before anything is touched.
pub fn prepare_target_dir<P: AsRef<Path>>(target_dir: P) -> Result<PathBuf> {
    let target_dir = target_dir.as_ref();
    if !target_dir.exists() {
        log::debug!("Creating target directory {}", target_dir.display());
        std::fs::create_dir_all(target_dir)?;
    }

    if std::fs::read_dir(target_dir)?.next().is_some() {
        return Err(Error::TargetDirectoryNotEmpty {
            target_dir: target_dir.display().to_string(),
        });
    }
    Ok(target_dir.to_path_buf())
}

/// Executes generation steps in order inside one project directory.
pub struct Scaffolder<'a> {
    root: PathBuf,
    runner: &'a dyn CommandRunner,
    writer: FileWriter<'a>,
    console: Console,
    options: ScaffoldOptions,
}

impl<'a> Scaffolder<'a> {
    pub fn new<P: Into<PathBuf>>(
        root: P,
        runner: &'a dyn CommandRunner,
        formatter: &'a dyn CodeFormatter,
        console: Console,
        options: ScaffoldOptions,
    ) -> Self {
        let root = root.into();
        let writer = FileWriter::new(root.clone(), formatter, console);
        Self { root, runner, writer, console, options }
    }

    /// Builds the steps of the configured preset for the project in `root`.
    pub fn plan(&self) -> Result<Vec<Step>> {
        let name = self
            .root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.root.display().to_string());
        self.options.preset.steps(
            &Project::new(name),
            self.options.package_manager,
            self.options.format,
        )
    }

    /// Runs every step, stopping at the first failure.
    ///
    /// Files written before the failing step are left in place.
    pub fn run(&self, steps: &[Step]) -> Result<()> {
        for step in steps {
            log::debug!("Step: {}", step.describe());
            if let Err(e) = self.execute(step) {
                log::error!("Failed to {}", step.describe());
                return Err(e);
            }
        }
        Ok(())
    }

    fn execute(&self, step: &Step) -> Result<()> {
        match step {
            Step::Execute(command) => {
                self.console.log("Executing", command);
                let output = self.runner.run(command, &self.root)?;
                if self.options.show_stdout {
                    self.console.echo(&output.stdout, Color::White);
                }
                if self.options.show_stderr {
                    self.console.echo(&output.stderr, Color::Red);
                }
                Ok(())
            }
            Step::CreateDir(path) => self.writer.create_dir(path),
            Step::Write(request) => self.writer.write(request),
            Step::WriteJson { path, value } => self.writer.write_json(path, value),
            Step::AddScript { manifest, name, command } => {
                self.add_script(manifest, name, command)
            }
        }
    }

    fn add_script(&self, manifest: &Path, name: &str, command: &str) -> Result<()> {
        self.console.log(
            "Patching",
            &format!("{} (adding {name} script)", manifest.display()),
        );
        let mut package = self.writer.read_json(manifest)?;

        let manifest_error = |reason: &str| Error::ManifestError {
            path: manifest.display().to_string(),
            reason: reason.to_string(),
        };

        let package_obj =
            package.as_object_mut().ok_or_else(|| manifest_error("not a JSON object"))?;
        let scripts = package_obj
            .entry("scripts")
            .or_insert_with(|| serde_json::Value::Object(serde_json::Map::new()));
        if scripts.is_null() {
            *scripts = serde_json::Value::Object(serde_json::Map::new());
        }
        scripts
            .as_object_mut()
            .ok_or_else(|| manifest_error("'scripts' is not an object"))?
            .insert(name.to_string(), serde_json::Value::String(command.to_string()));

        self.writer.write_json(manifest, &package)
    }

    /// Plans and runs the configured preset.
    pub fn scaffold(&self) -> Result<()> {
        let steps = self.plan()?;
        self.run(&steps)
    }
}
