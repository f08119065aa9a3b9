use clap::ValueEnum;
use std::fmt::Display;

/// Package manager used to create the manifest and install dependencies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Yarn,
    Npm,
}

impl PackageManager {
    /// Command creating a default `package.json`.
    pub fn init_command(&self) -> String {
        format!("{self} init --yes")
    }

    /// Command installing `packages`, as dev dependencies when `dev` is set.
    pub fn add_command(&self, packages: &[&str], dev: bool) -> String {
        let verb = match (self, dev) {
            (PackageManager::Yarn, false) => "add",
            (PackageManager::Yarn, true) => "add -D",
            (PackageManager::Npm, false) => "install",
            (PackageManager::Npm, true) => "install --save-dev",
        };
        format!("{self} {verb} {}", packages.join(" "))
    }

    /// Command starting the dev server once the project exists.
    pub fn start_command(&self) -> String {
        format!("{self} start")
    }
}

impl Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PackageManager::Yarn => "yarn",
            PackageManager::Npm => "npm",
        };
        write!(f, "{s}")
    }
}
