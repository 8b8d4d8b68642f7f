//! Error types for deployurl
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for deployurl operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Main error type for deployurl operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// The subprocess ran but exited non-zero (or was killed by a signal)
    #[error("There was an error executing the command {program}.")]
    SubprocessFailure {
        program: String,
        args: Vec<String>,
        stderr: String,
    },

    /// The subprocess could not be started at all
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Marker line missing, or nothing follows it
    #[error("marker line '{marker}' not found in deploy output (or it is the last line)")]
    MarkerNotFound { marker: String },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeployError {
    /// Diagnostic payload attached to the error, if any
    pub fn cause_payload(&self) -> Option<serde_json::Value> {
        match self {
            DeployError::SubprocessFailure { args, stderr, .. } => Some(serde_json::json!({
                "args": args,
                "output": stderr,
            })),
            _ => None,
        }
    }
}
