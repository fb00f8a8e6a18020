//! Optional pre-install repository sync.
use anyhow::Result;

use super::{Context, Task, TaskResult};

/// Pull latest changes from the remote repository before installing.
///
/// Every outcome short of success is a skip, never a failure: the install
/// proceeds with whatever is on disk. Fast-forward only, no automatic retry.
#[derive(Debug)]
pub struct SyncRepository;

impl Task for SyncRepository {
    fn name(&self) -> &'static str {
        "Sync repository"
    }

    fn should_run(&self, _ctx: &Context) -> bool {
        true
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        if !ctx.root.join(".git").exists() {
            ctx.log
                .warn("not a git working copy, installing from the files on disk");
            return Ok(TaskResult::Skipped("not a git working copy".to_string()));
        }

        if !ctx.executor.which("git") {
            ctx.log.warn("git not found on PATH, skipping sync");
            return Ok(TaskResult::Skipped("git not found".to_string()));
        }

        if ctx.dry_run {
            ctx.log.dry_run("git pull --ff-only");
            return Ok(TaskResult::DryRun);
        }

        ctx.log
            .debug(&format!("pulling in {}", ctx.root.display()));
        match ctx.executor.run_in(&ctx.root, "git", &["pull", "--ff-only"]) {
            Ok(r) => {
                let msg = r.stdout.trim();
                ctx.log.debug(&format!("git pull output: {msg}"));
                if msg.contains("Already up to date") {
                    ctx.log.info("already up to date");
                } else {
                    ctx.log.info("repository updated");
                }
                Ok(TaskResult::Ok)
            }
            Err(e) => {
                ctx.log.warn(&format!("git pull failed: {e:#}"));
                Ok(TaskResult::Skipped("git pull failed".to_string()))
            }
        }
    }
}
