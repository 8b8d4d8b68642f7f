//! Output Extractor
//!
//! Derives the deployment URL from the deploy tool's free-form stdout.
//! Two strategies exist because the tool's output format changed; they
//! disagree on edge cases and are kept separate on purpose.

use serde::{Deserialize, Serialize};

use crate::error::{DeployError, DeployResult};

/// Line that precedes the URL in the deploy tool's output
pub const MARKER: &str = "View at:";

const SEPARATOR: &str = " - ";
const TAIL_REPLACEMENT: &str = "url=";

/// Algorithm used to pull the URL out of the deploy output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractStrategy {
    /// Line following the `View at:` marker
    #[default]
    Marker,
    /// Last line, with the first " - " rewritten to "url="
    Tail,
}

impl ExtractStrategy {
    pub fn extract(self, output: &str) -> DeployResult<String> {
        match self {
            ExtractStrategy::Marker => extract_after_marker(output),
            ExtractStrategy::Tail => Ok(extract_tail(output)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExtractStrategy::Marker => "marker",
            ExtractStrategy::Tail => "tail",
        }
    }
}

impl std::str::FromStr for ExtractStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "marker" => Ok(ExtractStrategy::Marker),
            "tail" => Ok(ExtractStrategy::Tail),
            other => Err(format!(
                "invalid extract strategy '{}'. Use 'marker' or 'tail'",
                other
            )),
        }
    }
}

/// Marker-anchored: the line right after the first exact `View at:` line.
///
/// The first " - " is removed from that line. When there is none, a leading
/// "- " bullet is stripped instead.
pub fn extract_after_marker(output: &str) -> DeployResult<String> {
    let mut lines = output.split('\n');

    let found = lines.by_ref().any(|line| line == MARKER);
    let next = if found { lines.next() } else { None };

    let line = next.ok_or_else(|| DeployError::MarkerNotFound {
        marker: MARKER.to_string(),
    })?;

    if line.contains(SEPARATOR) {
        Ok(line.replacen(SEPARATOR, "", 1))
    } else {
        Ok(line.strip_prefix("- ").unwrap_or(line).to_string())
    }
}

/// Tail-anchored: the last line with its first " - " replaced by `url=`.
///
/// Text before the separator is kept as-is, so
/// `"Deployed Functions - https://x"` becomes `"Deployed Functionsurl=https://x"`.
pub fn extract_tail(output: &str) -> String {
    let last = output.split('\n').next_back().unwrap_or_default();
    last.replacen(SEPARATOR, TAIL_REPLACEMENT, 1)
}
