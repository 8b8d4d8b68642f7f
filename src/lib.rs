//! deployurl - deploy wrapper and hello-world echo server
//!
//! The deploy side runs the deploy CLI as a blocking subprocess, pulls the
//! deployment URL out of its output and writes `url=<url>` to a file. The
//! server side answers every HTTP request with a fixed JSON greeting.

pub mod config;
pub mod deploy;
pub mod error;
pub mod extract;
pub mod logging;
pub mod options;
pub mod runner;
pub mod server;

// Re-exports for convenience
pub use config::{Config, ConfigWarning, PrintMode};
pub use deploy::{build_command, deploy, write_output_file, DeployOutcome};
pub use error::{DeployError, DeployResult};
pub use extract::{extract_after_marker, extract_tail, ExtractStrategy, MARKER};
pub use options::DeployOptions;
pub use runner::{run, CommandResult, CommandRunner, CommandSpec, SystemRunner};
