//! Isolated test environment for running the deployurl binary.

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Result of running a deployurl CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Temp working directory and HOME, plus a fake deploy tool.
pub struct TestEnv {
    pub work_dir: TempDir,
    pub home_dir: TempDir,
    tool: Option<PathBuf>,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().expect("Failed to create work dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            tool: None,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_deployurl")),
        }
    }

    /// Install a fake deploy tool that records its arguments to `args.txt`,
    /// prints `stdout`, prints `stderr` to stderr, and exits with `code`.
    #[cfg(unix)]
    pub fn with_fake_tool(mut self, stdout: &str, stderr: &str, code: i32) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let dir = self.home_dir.path().join("bin");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("stdout.txt"), stdout).unwrap();
        std::fs::write(dir.join("stderr.txt"), stderr).unwrap();

        let script = format!(
            "#!/bin/sh\n\
             printf '%s\\n' \"$@\" > '{dir}/args.txt'\n\
             cat '{dir}/stdout.txt'\n\
             cat '{dir}/stderr.txt' >&2\n\
             exit {code}\n",
            dir = dir.display(),
            code = code
        );
        let tool = dir.join("deployctl");
        std::fs::write(&tool, script).unwrap();
        std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();

        self.tool = Some(tool);
        self
    }

    pub fn work_path(&self, relative: &str) -> PathBuf {
        self.work_dir.path().join(relative)
    }

    pub fn write_work_file(&self, relative: &str, content: &str) {
        std::fs::write(self.work_path(relative), content).unwrap();
    }

    pub fn read_work_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.work_path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Arguments the fake tool received, one per line
    pub fn recorded_args(&self) -> Vec<String> {
        let path = self.home_dir.path().join("bin").join("args.txt");
        std::fs::read_to_string(path)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.work_dir.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("GITHUB_ACTIONS");

        for key in [
            "DEPLOYURL_TOOL",
            "DEPLOYURL_PROJECT",
            "DEPLOYURL_ENTRYPOINT",
            "DEPLOYURL_STRATEGY",
            "DEPLOYURL_OUTPUT_FILE",
        ] {
            cmd.env_remove(key);
        }
        if let Some(tool) = &self.tool {
            cmd.env("DEPLOYURL_TOOL", tool);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute deployurl");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
