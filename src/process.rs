//! Centralized command execution with consistent error handling.
//!
//! Commands are always built as a program plus a discrete argument vector and
//! spawned directly. Nothing here goes through `sh -c`, so values containing
//! quotes or spaces reach the child process untouched.

use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

/// Result of a command execution.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit status of the command.
    pub status: ExitStatus,
    /// Captured stdout as a string.
    pub stdout: String,
    /// Captured stderr as a string.
    pub stderr: String,
}

impl CommandResult {
    /// Returns true if the command exited successfully.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Get the exit code, or -1 if terminated by signal.
    pub fn code(&self) -> i32 {
        exit_code(self.status)
    }

    /// Get stdout, trimmed of whitespace.
    pub fn stdout_trimmed(&self) -> &str {
        self.stdout.trim()
    }

    /// Get stderr, trimmed of whitespace.
    pub fn stderr_trimmed(&self) -> &str {
        self.stderr.trim()
    }
}

/// Exit code of a finished process, or -1 if it was terminated by a signal.
pub fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}

/// Builder for configuring command execution.
pub struct Cmd {
    program: String,
    args: Vec<String>,
    /// If true, don't fail on non-zero exit.
    allow_fail: bool,
}

impl Cmd {
    /// Create a new command builder.
    pub fn new(program: impl AsRef<str>) -> Self {
        Self {
            program: program.as_ref().to_string(),
            args: Vec::new(),
            allow_fail: false,
        }
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for arg in args {
            self.args.push(arg.as_ref().to_string());
        }
        self
    }

    /// Allow non-zero exit codes without failing.
    pub fn allow_fail(mut self) -> Self {
        self.allow_fail = true;
        self
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }

    fn failure_prefix(&self) -> String {
        format!("'{}' failed", self.program)
    }

    /// Run the command and capture output.
    pub fn run(self) -> Result<CommandResult> {
        let output = self.command().output().with_context(|| {
            format!("Failed to execute '{}'. Is it installed?", self.program)
        })?;

        let result = CommandResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        if !self.allow_fail && !result.success() {
            let prefix = self.failure_prefix();
            let stderr = result.stderr_trimmed();
            if stderr.is_empty() {
                bail!("{} (exit code {})", prefix, result.code());
            } else {
                bail!("{} (exit code {}):\n{}", prefix, result.code(), stderr);
            }
        }

        Ok(result)
    }

    /// Run the command with inherited stdio (interactive/streaming).
    ///
    /// Output goes directly to the terminal. Blocks until the child exits;
    /// there is no timeout.
    pub fn run_interactive(self) -> Result<ExitStatus> {
        let mut cmd = self.command();
        cmd.stdin(Stdio::inherit());
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());

        let status = cmd.status().with_context(|| {
            format!("Failed to execute '{}'. Is it installed?", self.program)
        })?;

        if !self.allow_fail && !status.success() {
            bail!("{} (exit code {})", self.failure_prefix(), exit_code(status));
        }

        Ok(status)
    }
}

/// Run a command with arguments. Fails with stderr on error.
pub fn run<I, S>(program: &str, args: I) -> Result<CommandResult>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Cmd::new(program).args(args).run()
}

/// Check if a program exists in PATH.
///
/// Returns the full path if found, None otherwise.
pub fn which(program: &str) -> Option<PathBuf> {
    ::which::which(program).ok()
}
