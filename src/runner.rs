//! Command Runner
//!
//! Runs an external program as a blocking subprocess and captures its output.
//! Arguments are handed to the OS as discrete tokens; nothing goes through a
//! shell.
//!
//! There is no timeout: a subprocess that never exits blocks the caller
//! forever.

use std::fmt;
use std::process::{Command, Stdio};

use crate::error::{DeployError, DeployResult};

/// A program and its ordered argument list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Raw result of one subprocess invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CommandResult {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Process spawning seam
///
/// `SystemRunner` talks to the OS; tests substitute a scripted runner.
pub trait CommandRunner {
    fn output(&self, spec: &CommandSpec) -> std::io::Result<CommandResult>;
}

/// Runs commands with `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn output(&self, spec: &CommandSpec) -> std::io::Result<CommandResult> {
        let output = Command::new(spec.program())
            .args(spec.arguments())
            .stdin(Stdio::null())
            .output()?;

        Ok(CommandResult {
            exit_code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

/// Run `spec` to completion and return its trimmed stdout.
///
/// Non-zero exit yields `SubprocessFailure` with the captured stderr.
pub fn run(runner: &dyn CommandRunner, spec: &CommandSpec) -> DeployResult<String> {
    tracing::debug!(command = %spec, "executing command");

    let result = runner.output(spec).map_err(|source| DeployError::Spawn {
        program: spec.program().to_string(),
        source,
    })?;

    if !result.success() {
        tracing::debug!(exit_code = ?result.exit_code, "command failed");
        return Err(DeployError::SubprocessFailure {
            program: spec.program().to_string(),
            args: spec.arguments().to_vec(),
            stderr: String::from_utf8_lossy(&result.stderr).into_owned(),
        });
    }

    Ok(String::from_utf8_lossy(&result.stdout).trim().to_string())
}
