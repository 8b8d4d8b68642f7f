//! Configuration module for deployurl
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DEPLOYURL_*)
//! 3. Project config (./deployurl.toml) or `--config <path>`
//! 4. User config (~/.config/deployurl/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, with_overrides_from, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, DeployConfig, OutputConfig, PrintMode, ServerConfig};
