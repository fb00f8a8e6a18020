//! External process execution behind an injectable [`Executor`] trait.
//!
//! The only external tool the installer shells out to is `git` (for the
//! optional pre-install sync). Tasks receive an `Arc<dyn Executor>` through
//! their context so unit tests can substitute a mock and never spawn real
//! processes.

use anyhow::{Context, Result, bail};
use std::path::Path;
use std::process::{Command, Output};

/// Result of a command execution.
#[derive(Debug)]
pub struct ExecResult {
    /// Captured standard output, lossily decoded.
    pub stdout: String,
    /// Captured standard error, lossily decoded.
    pub stderr: String,
    /// Whether the process exited with status zero.
    pub success: bool,
    /// Raw exit code, when the process was not killed by a signal.
    pub code: Option<i32>,
}

impl From<Output> for ExecResult {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        }
    }
}

/// Abstraction over external command invocation.
pub trait Executor: Send + Sync + std::fmt::Debug {
    /// Run a command in a specific directory. Fails if the command cannot be
    /// spawned or exits non-zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be executed or exits with a
    /// non-zero status; the error message includes the trimmed stderr.
    fn run_in(&self, dir: &Path, program: &str, args: &[&str]) -> Result<ExecResult>;

    /// Check if a program is available on `PATH`.
    fn which(&self, program: &str) -> bool;
}

/// Production [`Executor`] that spawns real processes.
#[derive(Debug, Default)]
pub struct SystemExecutor;

impl Executor for SystemExecutor {
    fn run_in(&self, dir: &Path, program: &str, args: &[&str]) -> Result<ExecResult> {
        let label = format!("{program} in {}", dir.display());
        let output = Command::new(program)
            .args(args)
            .current_dir(dir)
            .output()
            .with_context(|| format!("failed to execute: {label}"))?;
        let result = ExecResult::from(output);
        if !result.success {
            bail!(
                "{label} failed (exit {}): {}",
                result.code.unwrap_or(-1),
                result.stderr.trim()
            );
        }
        Ok(result)
    }

    fn which(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}
