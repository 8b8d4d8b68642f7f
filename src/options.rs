//! Option Resolution
//!
//! Turns the raw `deploy` arguments into [`DeployOptions`].

use serde::Serialize;

/// Options for a single deploy run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeployOptions {
    pub production: bool,
    /// Unrecognized arguments, kept in order and otherwise ignored
    pub rest: Vec<String>,
}

impl DeployOptions {
    /// Resolve options from the raw `--production` value.
    ///
    /// `None` means the flag was absent. A bare `--production` arrives as
    /// `"true"`. Anything that is not a boolean resolves to `false`.
    ///
    /// `--production` tokens that ended up in `rest` (after an unrecognized
    /// argument) are removed from it and override `production`, since they
    /// appeared later on the command line.
    pub fn resolve(production: Option<&str>, rest: Vec<String>) -> Self {
        let (trailing, rest) = take_production(rest);
        let production = trailing.as_deref().or(production);
        let production = production.and_then(parse_bool).unwrap_or(false);

        if !rest.is_empty() {
            tracing::debug!(?rest, "ignoring unrecognized deploy arguments");
        }

        Self { production, rest }
    }
}

/// Split `--production` / `--production=<v>` out of `rest`; the last one wins
fn take_production(rest: Vec<String>) -> (Option<String>, Vec<String>) {
    let mut production = None;
    let mut kept = Vec::with_capacity(rest.len());

    for arg in rest {
        if arg == "--production" {
            production = Some("true".to_string());
        } else if let Some(value) = arg.strip_prefix("--production=") {
            production = Some(value.to_string());
        } else {
            kept.push(arg);
        }
    }

    (production, kept)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
