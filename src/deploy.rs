//! Deploy use case
//!
//! Composes the pieces: build the deploy-tool command, run it, extract the
//! URL, persist it.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::config::DeployConfig;
use crate::error::DeployResult;
use crate::extract::ExtractStrategy;
use crate::options::DeployOptions;
use crate::runner::{self, CommandRunner, CommandSpec};

/// Result of a successful deploy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeployOutcome {
    /// Trimmed stdout of the deploy tool
    pub output: String,
    /// Value produced by the extractor
    pub url: String,
    pub strategy: ExtractStrategy,
}

impl DeployOutcome {
    /// Line written to the output file.
    ///
    /// The tail extractor already yields a `url=` line, so it is used as-is.
    pub fn output_line(&self) -> String {
        match self.strategy {
            ExtractStrategy::Marker => format!("url={}", self.url),
            ExtractStrategy::Tail => self.url.clone(),
        }
    }
}

/// `<tool> deploy --project=<p> --include=<i>... [--production] [<entrypoint>]`
pub fn build_command(config: &DeployConfig, options: &DeployOptions) -> CommandSpec {
    let mut spec = CommandSpec::new(&config.tool)
        .arg("deploy")
        .arg(format!("--project={}", config.project))
        .args(config.include.iter().map(|path| format!("--include={}", path)));

    if options.production {
        spec = spec.arg("--production");
    }

    if config.append_entrypoint {
        spec = spec.arg(&config.entrypoint);
    }

    spec
}

/// Run the deploy tool and extract the URL from its output
pub fn deploy(
    runner: &dyn CommandRunner,
    config: &DeployConfig,
    options: &DeployOptions,
    strategy: ExtractStrategy,
) -> DeployResult<DeployOutcome> {
    let spec = build_command(config, options);
    let output = runner::run(runner, &spec)?;
    let url = strategy.extract(&output)?;

    tracing::info!(url = %url, strategy = strategy.as_str(), "deployment URL extracted");

    Ok(DeployOutcome {
        output,
        url,
        strategy,
    })
}

/// Replace `path` with `line` (no trailing newline).
///
/// Writes to a temp file next to the target and renames it into place.
pub fn write_output_file(path: &Path, line: &str) -> DeployResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(line.as_bytes())?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;

    tracing::debug!(path = %path.display(), "wrote output file");
    Ok(())
}
