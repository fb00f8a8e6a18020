//! Manifest-driven installation of the command template files.
use anyhow::Result;

use super::{Context, Task, TaskResult};
use crate::logging::TaskStatus;
use crate::manifest;
use crate::resources::command_file::CommandFileResource;
use crate::resources::{Resource as _, ResourceChange, ResourceState};

/// Copy every manifest entry into the destination commands directory.
///
/// Entries are processed independently in manifest order; one summary line
/// is recorded per file. A missing source file is a per-entry warning and
/// never stops the remaining entries.
#[derive(Debug)]
pub struct InstallCommandFiles;

impl Task for InstallCommandFiles {
    fn name(&self) -> &'static str {
        "Install command templates"
    }

    fn should_run(&self, _ctx: &Context) -> bool {
        !manifest::command_manifest().is_empty()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        ctx.log
            .debug(&format!("destination: {}", ctx.dest.display()));

        for entry in manifest::command_manifest() {
            let resource = CommandFileResource::from_entry(&entry, &ctx.root, &ctx.dest);
            process_entry(ctx, &resource);
        }

        if ctx.dry_run {
            return Ok(TaskResult::DryRun);
        }
        Ok(TaskResult::Ok)
    }
}

/// Install a single command file and record its summary entry.
fn process_entry(ctx: &Context, resource: &CommandFileResource) {
    let name = resource.description();

    if !resource.source_exists() {
        ctx.log.warn(&format!("{name} not found, skipping"));
        ctx.log
            .record_task(&name, TaskStatus::Skipped, Some("not found"));
        return;
    }

    let state = match resource.current_state() {
        Ok(state) => state,
        Err(e) => {
            ctx.log.error(&format!("{name}: {e:#}"));
            ctx.log
                .record_task(&name, TaskStatus::Failed, Some(&format!("{e:#}")));
            return;
        }
    };

    if state == ResourceState::Correct {
        ctx.log.debug(&format!("up to date: {name}"));
        ctx.log
            .record_task(&name, TaskStatus::Ok, Some("up to date"));
        return;
    }

    if ctx.dry_run {
        let verb = if state == ResourceState::Missing {
            "install"
        } else {
            "refresh"
        };
        ctx.log.dry_run(&format!("would {verb} {name}"));
        ctx.log.record_task(&name, TaskStatus::DryRun, None);
        return;
    }

    match resource.apply() {
        Ok(ResourceChange::Applied) => {
            ctx.log.info(&format!("installed {name}"));
            ctx.log.record_task(&name, TaskStatus::Ok, None);
        }
        Ok(ResourceChange::AlreadyCorrect) => {
            ctx.log
                .record_task(&name, TaskStatus::Ok, Some("up to date"));
        }
        Ok(ResourceChange::Skipped { reason }) => {
            ctx.log.warn(&format!("skipping {name}: {reason}"));
            ctx.log
                .record_task(&name, TaskStatus::Skipped, Some(&reason));
        }
        Err(e) => {
            ctx.log.error(&format!("failed to install {name}: {e:#}"));
            ctx.log
                .record_task(&name, TaskStatus::Failed, Some(&format!("{e:#}")));
        }
    }
}
