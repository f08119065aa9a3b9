use crate::{
    cli::Args,
    command::ShellRunner,
    console::Console,
    error::Result,
    format::{Prettier, PrettierOptions},
    scaffold::{prepare_target_dir, Scaffolder},
};
use colored::Color;
use std::path::PathBuf;

/// Main CLI runner that orchestrates the whole initialization
pub struct Runner {
    args: Args,
    console: Console,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args, console: Console::new() }
    }

    /// Executes the complete initialization workflow
    pub fn run(self) -> Result<()> {
        let target_dir = prepare_target_dir(self.resolve_target_dir()?)?;
        self.console.log_styled(
            "Init",
            &target_dir.display().to_string(),
            Color::White,
            Color::Yellow,
        );

        let options = self.args.scaffold_options();
        let formatter = Prettier::new(&self.args.prettier, PrettierOptions::default());
        let scaffolder =
            Scaffolder::new(&target_dir, &ShellRunner, &formatter, self.console, options);
        scaffolder.scaffold()?;

        self.console.log(
            "Done",
            &format!(
                "Project ready in {}. Run `{}` there to start the dev server.",
                target_dir.display(),
                options.package_manager.start_command()
            ),
        );
        Ok(())
    }

    /// Absolute target directory, defaulting to the current one.
    fn resolve_target_dir(&self) -> Result<PathBuf> {
        let cwd = std::env::current_dir()?;
        Ok(match &self.args.target_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => cwd.join(dir),
            None => cwd,
        })
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let runner = Runner::new(args);
    runner.run()
}
