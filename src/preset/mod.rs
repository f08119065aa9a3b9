//! Project presets.
//!
//! Each preset is one flavour of the generated project: the packages it
//! installs and the ordered list of files it writes.

pub mod package_manager;
pub mod templates;

pub use package_manager::PackageManager;

use clap::ValueEnum;
use std::fmt::Display;
use std::path::PathBuf;

use crate::{
    constants::{MANIFEST_FILE, START_SCRIPT_NAME},
    error::Result,
    format::PrettierOptions,
    scaffold::Step,
    writer::WriteRequest,
};

/// Flavour of the generated project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Preset {
    /// React with ts-loader and less/css loaders, installed as runtime dependencies.
    Classic,
    /// React styled with emotion, compiled through babel.
    Emotion,
    /// The emotion stack with an es2017 target plus editor integration files.
    #[default]
    Modern,
}

impl Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Preset::Classic => "classic",
            Preset::Emotion => "emotion",
            Preset::Modern => "modern",
        };
        write!(f, "{s}")
    }
}

const CLASSIC_PACKAGES: &[&str] = &[
    "typescript",
    "react",
    "react-dom",
    "@types/react",
    "@types/react-dom",
    "webpack",
    "webpack-dev-server",
    "html-webpack-plugin",
    "less",
    "less-loader",
    "file-loader",
    "url-loader",
    "style-loader",
    "css-loader",
    "ts-loader",
];

const EMOTION_PACKAGES: &[&str] = &[
    "typescript",
    "react",
    "react-dom",
    "@types/react",
    "@types/react-dom",
    "babel-core",
    "babel-loader",
    "webpack",
    "webpack-dev-server",
    "html-webpack-plugin",
    "emotion",
    "react-emotion",
    "babel-plugin-emotion",
    "ts-loader",
];

const LEGACY_START: &str = "webpack-dev-server -d --hot --content-base=dist/";
const MODERN_START: &str =
    "webpack-dev-server --debug --output-pathinfo --hot --content-base=dist/";

/// What the generated project is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
}

impl Project {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }
}

impl Preset {
    pub fn packages(&self) -> &'static [&'static str] {
        match self {
            Preset::Classic => CLASSIC_PACKAGES,
            Preset::Emotion | Preset::Modern => EMOTION_PACKAGES,
        }
    }

    /// Whether packages are installed as dev dependencies.
    pub fn dev_dependencies(&self) -> bool {
        !matches!(self, Preset::Classic)
    }

    pub fn start_script(&self) -> &'static str {
        match self {
            Preset::Classic | Preset::Emotion => LEGACY_START,
            Preset::Modern => MODERN_START,
        }
    }

    /// Builds the ordered steps generating `project`.
    ///
    /// # Arguments
    /// * `project` - The project being generated
    /// * `package_manager` - Tool used for the manifest and the installs
    /// * `format` - Whether JS/TS sources go through the code formatter
    pub fn steps(
        &self,
        project: &Project,
        package_manager: PackageManager,
        format: bool,
    ) -> Result<Vec<Step>> {
        let style = PrettierOptions::default();

        let mut steps = vec![
            Step::Execute(package_manager.init_command()),
            Step::Execute(
                package_manager.add_command(self.packages(), self.dev_dependencies()),
            ),
        ];

        let (tsconfig, webpack, index_tsx) = match self {
            Preset::Classic => {
                (templates::tsconfig_es5(), templates::WEBPACK_LESS, templates::INDEX_TSX_PLAIN)
            }
            Preset::Emotion => {
                (templates::tsconfig_es5(), templates::WEBPACK_BABEL, templates::INDEX_TSX_PLAIN)
            }
            Preset::Modern => (
                templates::tsconfig_es2017(),
                templates::WEBPACK_SOURCE_MAPS,
                templates::INDEX_TSX_STYLED,
            ),
        };
        let format = format && *self == Preset::Modern;

        steps.push(Step::WriteJson { path: "tsconfig.json".into(), value: tsconfig });
        steps.push(Step::Write(
            WriteRequest::text("webpack.config.js", webpack).formatted(format),
        ));
        steps.push(Step::CreateDir("src".into()));
        steps.push(Step::Write(WriteRequest::text(
            "src/index.html",
            templates::index_html(&project.name)?,
        )));
        steps.push(Step::Write(
            WriteRequest::text("src/index.tsx", index_tsx).formatted(format),
        ));

        if *self != Preset::Classic {
            steps.push(Step::WriteJson { path: ".babelrc".into(), value: templates::babelrc() });
        }

        match self {
            Preset::Classic => {}
            Preset::Emotion => steps.push(Step::WriteJson {
                path: ".prettierrc".into(),
                value: templates::prettierrc_basic(&style),
            }),
            Preset::Modern => {
                steps.push(Step::WriteJson {
                    path: ".prettierrc".into(),
                    value: serde_json::to_value(&style)?,
                });
                steps.push(Step::Write(WriteRequest::text(
                    ".editorconfig",
                    templates::editorconfig(&style),
                )));
                steps.push(Step::CreateDir(".vscode".into()));
                steps.push(Step::WriteJson {
                    path: PathBuf::from(".vscode").join("settings.json"),
                    value: templates::vscode_settings(&style),
                });
            }
        }

        steps.push(Step::AddScript {
            manifest: MANIFEST_FILE.into(),
            name: START_SCRIPT_NAME.into(),
            command: self.start_script().into(),
        });

        Ok(steps)
    }
}
