use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Captured output of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Trait for running external shell commands.
pub trait CommandRunner {
    /// Runs `command` inside `cwd` and waits for it to finish.
    ///
    /// # Returns
    /// * `Result<CommandOutput>` - Captured output, or an error on spawn failure or non-zero exit
    fn run(&self, command: &str, cwd: &Path) -> Result<CommandOutput>;
}

/// Runs commands through the platform shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl ShellRunner {
    fn shell(command: &str) -> Command {
        if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(command);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(command);
            cmd
        }
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str, cwd: &Path) -> Result<CommandOutput> {
        log::debug!("Running '{command}' in {}", cwd.display());

        let output = Self::shell(command)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(Error::CommandFailed {
                command: command.to_string(),
                status: output.status,
                stderr,
            });
        }

        Ok(CommandOutput { stdout, stderr })
    }
}
