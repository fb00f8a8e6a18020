//! Installer for Databricks slash-command templates.
//!
//! Copies a fixed manifest of command prompt templates from this repository
//! into the user's `~/.claude/commands` directory so that an AI coding agent
//! can pick them up as `/dbapps`, `/dbaiassistant`, `/dbgeniespaces`, and
//! `/dbtestrunner`. Optionally pulls the repository from its remote first.
//!
//! The crate is organised into five layers:
//!
//! - **[`manifest`]** — the declarative list of installable command files
//! - **[`resources`]** — idempotent `check + apply` file-copy primitive
//! - **[`tasks`]** — named units of work (repository sync, manifest install)
//! - **[`commands`]** — top-level subcommand orchestration (`install`)
//! - **[`logging`]** — console/file output and the run summary
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod exec;
pub mod logging;
pub mod manifest;
pub mod resources;
pub mod tasks;
