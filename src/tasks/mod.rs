//! Named units of work executed by the install command.
pub mod install;
pub mod update;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use crate::exec::{Executor, SystemExecutor};
use crate::logging::{Log, TaskStatus};

/// Shared context for task execution.
pub struct Context {
    /// Root directory of the command repository.
    pub root: PathBuf,
    /// Destination commands directory (normally `~/.claude/commands`).
    pub dest: PathBuf,
    /// Logger for output and task recording.
    pub log: Arc<dyn Log>,
    /// Whether to perform a dry run (preview changes without applying).
    pub dry_run: bool,
    /// Command executor (for testing or real system calls).
    pub executor: Arc<dyn Executor>,
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("root", &self.root)
            .field("dest", &self.dest)
            .field("log", &"<dyn Log>")
            .field("dry_run", &self.dry_run)
            .field("executor", &"<dyn Executor>")
            .finish()
    }
}

impl Context {
    /// Create a context backed by the real system executor.
    #[must_use]
    pub fn new(root: PathBuf, dest: PathBuf, log: Arc<dyn Log>, dry_run: bool) -> Self {
        Self {
            root,
            dest,
            log,
            dry_run,
            executor: Arc::new(SystemExecutor),
        }
    }

    /// Create a copy of this context with a different executor.
    #[must_use]
    pub fn with_executor(&self, executor: Arc<dyn Executor>) -> Self {
        Self {
            root: self.root.clone(),
            dest: self.dest.clone(),
            log: Arc::clone(&self.log),
            dry_run: self.dry_run,
            executor,
        }
    }
}

/// Result of a completed task run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskResult {
    /// Task completed successfully.
    Ok,
    /// Task was skipped, with a reason for the summary.
    Skipped(String),
    /// Task ran in dry-run mode; no changes were applied.
    DryRun,
}

/// A named, executable task.
pub trait Task: Send + Sync {
    /// Human-readable task name.
    fn name(&self) -> &str;

    /// Whether this task should run in the given context.
    fn should_run(&self, ctx: &Context) -> bool;

    /// Execute the task.
    ///
    /// # Errors
    ///
    /// Returns an error only for unexpected failures (I/O, permissions);
    /// expected conditions such as a missing source file or a failed
    /// `git pull` are reported through [`TaskResult::Skipped`].
    fn run(&self, ctx: &Context) -> Result<TaskResult>;
}

/// Execute a task, recording the result in the logger.
pub fn execute(task: &dyn Task, ctx: &Context) {
    if !task.should_run(ctx) {
        ctx.log
            .debug(&format!("skipping task: {} (not applicable)", task.name()));
        ctx.log
            .record_task(task.name(), TaskStatus::Skipped, Some("not applicable"));
        return;
    }

    ctx.log.stage(task.name());

    match task.run(ctx) {
        Ok(TaskResult::Ok) => {
            ctx.log.record_task(task.name(), TaskStatus::Ok, None);
        }
        Ok(TaskResult::Skipped(reason)) => {
            ctx.log
                .record_task(task.name(), TaskStatus::Skipped, Some(&reason));
        }
        Ok(TaskResult::DryRun) => {
            ctx.log.record_task(task.name(), TaskStatus::DryRun, None);
        }
        Err(e) => {
            ctx.log.error(&format!("{}: {e:#}", task.name()));
            ctx.log
                .record_task(task.name(), TaskStatus::Failed, Some(&format!("{e:#}")));
        }
    }
}

/// Shared helpers for task unit tests.
#[cfg(test)]
pub mod test_helpers {
    use std::collections::VecDeque;
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    use crate::exec::{ExecResult, Executor};
    use crate::logging::Logger;

    use super::Context;

    /// A configurable mock executor for task unit tests.
    ///
    /// Maintains a queue of `(success, stdout)` responses consumed in FIFO
    /// order. When the queue is empty any call returns a failed response.
    /// Use [`with_which`](Self::with_which) to configure the value returned
    /// by [`Executor::which`] (defaults to `true`).
    #[derive(Debug)]
    pub struct MockExecutor {
        responses: Mutex<VecDeque<(bool, String)>>,
        which_result: bool,
    }

    impl MockExecutor {
        /// Create a mock with a single successful response.
        #[must_use]
        pub fn ok(stdout: &str) -> Self {
            Self::with_responses(vec![(true, stdout.to_string())])
        }

        /// Create a mock with a single failed response.
        #[must_use]
        pub fn fail() -> Self {
            Self::with_responses(vec![(false, String::new())])
        }

        /// Create a mock from an ordered list of `(success, stdout)` pairs.
        #[must_use]
        pub fn with_responses(responses: Vec<(bool, String)>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                which_result: true,
            }
        }

        /// Set the value returned by every [`Executor::which`] call.
        #[must_use]
        pub const fn with_which(mut self, result: bool) -> Self {
            self.which_result = result;
            self
        }
    }

    impl Executor for MockExecutor {
        fn run_in(&self, _: &Path, _: &str, _: &[&str]) -> anyhow::Result<ExecResult> {
            let (success, stdout) = self.responses.lock().map_or_else(
                |_| (false, "mutex poisoned".to_string()),
                |mut guard| {
                    guard
                        .pop_front()
                        .unwrap_or_else(|| (false, "unexpected call".to_string()))
                },
            );
            if success {
                Ok(ExecResult {
                    stdout,
                    stderr: String::new(),
                    success: true,
                    code: Some(0),
                })
            } else {
                anyhow::bail!("mock command failed")
            }
        }

        fn which(&self, _: &str) -> bool {
            self.which_result
        }
    }

    /// Build a [`Context`] over the given root and destination with a
    /// recording [`Logger`], also returned for inspection.
    #[must_use]
    pub fn make_context(root: PathBuf, dest: PathBuf) -> (Context, Arc<Logger>) {
        let log = Arc::new(Logger::new("test"));
        let ctx = Context::new(root, dest, Arc::clone(&log) as Arc<dyn crate::logging::Log>, false);
        (ctx, log)
    }
}
