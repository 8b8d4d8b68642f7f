//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DeployError, DeployResult};
use crate::extract::ExtractStrategy;

use super::types::Config;

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "deployurl.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DeployResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DeployError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from an explicit path, `./deployurl.toml`, the user config, or defaults.
///
/// Environment overrides are applied last.
pub fn discover(explicit: Option<&Path>, cwd: &Path) -> DeployResult<(Config, Vec<ConfigWarning>)> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let project_config = cwd.join(PROJECT_CONFIG_FILE);
            if project_config.exists() {
                Some(project_config)
            } else {
                user_config_path().filter(|p| p.exists())
            }
        }
    };

    let (config, warnings) = match candidate {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            load_with_warnings(&path)?
        }
        None => (Config::default(), Vec::new()),
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (DEPLOYURL_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides read through `var`
pub fn with_overrides_from(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(tool) = var("DEPLOYURL_TOOL") {
        config.deploy.tool = tool;
    }

    if let Some(project) = var("DEPLOYURL_PROJECT") {
        config.deploy.project = project;
    }

    if let Some(entrypoint) = var("DEPLOYURL_ENTRYPOINT") {
        config.deploy.entrypoint = entrypoint;
    }

    // DEPLOYURL_STRATEGY (unknown values are ignored)
    if let Some(strategy) = var("DEPLOYURL_STRATEGY") {
        match strategy.parse::<ExtractStrategy>() {
            Ok(strategy) => config.output.strategy = strategy,
            Err(message) => tracing::warn!("ignoring DEPLOYURL_STRATEGY: {}", message),
        }
    }

    if let Some(file) = var("DEPLOYURL_OUTPUT_FILE") {
        config.output.file = PathBuf::from(file);
    }

    config
}

/// `~/.config/deployurl/config.toml` (or the platform equivalent)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("deployurl").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "deploy",
        "tool",
        "project",
        "entrypoint",
        "include",
        "append_entrypoint",
        "output",
        "strategy",
        "file",
        "print",
        "server",
        "addr",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
