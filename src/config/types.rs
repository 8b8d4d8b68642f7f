//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::DeployResult;
use crate::extract::ExtractStrategy;

use super::loader::{self, ConfigWarning};

/// How the deploy tool is invoked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Deploy CLI executable, resolved via PATH
    #[serde(default = "default_tool")]
    pub tool: String,

    #[serde(default = "default_project")]
    pub project: String,

    #[serde(default = "default_entrypoint")]
    pub entrypoint: String,

    /// Passed as one `--include=<path>` per entry
    #[serde(default = "default_include")]
    pub include: Vec<String>,

    /// Append the entrypoint as the final positional argument
    #[serde(default = "default_true")]
    pub append_entrypoint: bool,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            tool: default_tool(),
            project: default_project(),
            entrypoint: default_entrypoint(),
            include: default_include(),
            append_entrypoint: true,
        }
    }
}

fn default_tool() -> String {
    "deployctl".to_string()
}

fn default_project() -> String {
    "toriexperiments".to_string()
}

fn default_entrypoint() -> String {
    "main.ts".to_string()
}

fn default_include() -> Vec<String> {
    vec!["main.ts".to_string()]
}

fn default_true() -> bool {
    true
}

/// What gets printed to stdout after a successful deploy
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrintMode {
    /// The deploy tool's full output
    #[default]
    Raw,
    /// Only the `url=...` line
    Url,
}

/// Where the extracted URL goes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub strategy: ExtractStrategy,

    #[serde(default = "default_output_file")]
    pub file: PathBuf,

    #[serde(default)]
    pub print: PrintMode,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            strategy: ExtractStrategy::default(),
            file: default_output_file(),
            print: PrintMode::default(),
        }
    }
}

fn default_output_file() -> PathBuf {
    PathBuf::from("./output.txt")
}

/// Echo server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_addr")]
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
        }
    }
}

fn default_addr() -> String {
    "0.0.0.0:8000".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> DeployResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> DeployResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit path, the working directory, user config, or defaults
    pub fn discover(
        explicit: Option<&Path>,
        cwd: &Path,
    ) -> DeployResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(explicit, cwd)
    }
}
