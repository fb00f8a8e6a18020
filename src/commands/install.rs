//! The `install` command: resolve paths, sync, copy, summarise.
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use crate::cli::GlobalOpts;
use crate::error::SetupError;
use crate::logging::{Log, Logger};
use crate::manifest;
use crate::tasks::{self, Context, Task};

/// Run the install command.
///
/// # Errors
///
/// Returns an error if the repository root cannot be resolved or the
/// destination directory cannot be created. Per-entry problems (missing
/// template, failed sync) are reported in the summary instead.
pub fn run(global: &GlobalOpts, log: &Arc<Logger>) -> Result<()> {
    let version = option_env!("DBCOMMANDS_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
    log.info(&format!("dbcommands {version}"));

    let root = resolve_root(global)?;
    log.debug(&format!("repository root: {}", root.display()));

    let dest = resolve_dest(global)?;
    if global.dry_run {
        log.debug(&format!("destination: {} (dry run)", dest.display()));
    } else {
        std::fs::create_dir_all(&dest).map_err(|source| SetupError::DestinationCreate {
            path: dest.clone(),
            source,
        })?;
    }

    let ctx = Context::new(
        root,
        dest.clone(),
        Arc::clone(log) as Arc<dyn Log>,
        global.dry_run,
    );

    let mut task_list: Vec<Box<dyn Task>> = Vec::new();
    if global.update {
        task_list.push(Box::new(tasks::update::SyncRepository));
    }
    task_list.push(Box::new(tasks::install::InstallCommandFiles));

    for task in &task_list {
        tasks::execute(task.as_ref(), &ctx);
    }

    log.print_summary();
    print_usage(log, &dest);

    if log.has_failures() {
        anyhow::bail!("one or more entries failed");
    }
    Ok(())
}

/// Print the post-install usage guidance naming the available commands.
fn print_usage(log: &Arc<Logger>, dest: &std::path::Path) {
    log.info("");
    log.stage("Usage");
    log.info(&format!(
        "templates installed to {}",
        dest.display()
    ));
    log.info("available slash commands:");
    for name in manifest::slash_commands() {
        log.info(&format!("  /{name}"));
    }
}

/// Resolve the command repository root from CLI arguments or auto-detection.
///
/// Order: `--root` flag, `DBCOMMANDS_ROOT` env var, the directory the
/// installed binary lives in (and its ancestors), then the current
/// directory. A candidate counts as the root when it contains the
/// `commands/` template directory.
///
/// # Errors
///
/// Returns [`SetupError::RootNotFound`] when no candidate qualifies.
pub fn resolve_root(global: &GlobalOpts) -> Result<PathBuf> {
    if let Some(ref root) = global.root {
        return Ok(root.clone());
    }

    if let Ok(root) = std::env::var("DBCOMMANDS_ROOT") {
        return Ok(PathBuf::from(root));
    }

    if let Ok(exe) = std::env::current_exe()
        && let Some(parent) = exe.parent()
    {
        // Covers running from the repo root, bin/, and target/<profile>/.
        let candidates = [
            parent.to_path_buf(),
            parent.join(".."),
            parent.join("../.."),
        ];
        for candidate in &candidates {
            if candidate.join(manifest::COMMANDS_DIR).is_dir() {
                return Ok(dunce::canonicalize(candidate)?);
            }
        }
    }

    let cwd = std::env::current_dir()?;
    if cwd.join(manifest::COMMANDS_DIR).is_dir() {
        return Ok(cwd);
    }

    Err(SetupError::RootNotFound.into())
}

/// Resolve the destination commands directory.
///
/// `--dest` wins; otherwise `~/.claude/commands` under the user's home
/// directory (`USERPROFILE` first on Windows).
///
/// # Errors
///
/// Returns [`SetupError::HomeNotSet`] when no home directory can be found.
pub fn resolve_dest(global: &GlobalOpts) -> Result<PathBuf> {
    if let Some(ref dest) = global.dest {
        return Ok(dest.clone());
    }

    let home = if cfg!(target_os = "windows") {
        std::env::var("USERPROFILE").or_else(|_| std::env::var("HOME"))
    } else {
        std::env::var("HOME")
    }
    .map_err(|_| SetupError::HomeNotSet)?;

    Ok(PathBuf::from(home).join(".claude").join("commands"))
}
