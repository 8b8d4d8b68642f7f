pub mod deploy;
pub mod serve;

use std::path::Path;

use anyhow::Result;
use deployurl::Config;

use crate::ui::ci::{self, AnnotationLevel};

/// Load the layered config and report unknown keys
pub fn load_config(explicit: Option<&Path>, json: bool) -> Result<Config> {
    let cwd = std::env::current_dir()?;
    let (config, warnings) = Config::discover(explicit, &cwd)?;

    for warning in &warnings {
        tracing::warn!("{}", warning);
        if !json && ci::is_github_actions() {
            let file = warning.file.display().to_string();
            println!(
                "{}",
                ci::annotation(AnnotationLevel::Warning, &warning.to_string(), Some(&file))
            );
        }
    }

    Ok(config)
}
