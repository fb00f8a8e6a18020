//! The fixed manifest of installable command template files.
//!
//! One [`ManifestEntry`] per installed file. The list is hard-coded: it is
//! rebuilt on every run, insertion order determines install and report
//! order, and nothing is persisted. `/dbapps` contributes two files (the
//! prompt template plus the deployment script it references); the other
//! commands are a single markdown template each.

/// Directory inside the repository that holds the template sources.
pub const COMMANDS_DIR: &str = "commands";

/// One installable file: logical command, repo-relative source path, and
/// destination file name inside `~/.claude/commands`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Slash command this file belongs to (without the leading `/`).
    pub command: &'static str,
    /// Source path relative to the repository root.
    pub source: &'static str,
    /// File name in the destination directory (always a bare basename).
    pub dest_name: &'static str,
}

/// The complete install manifest, in install order.
#[must_use]
pub fn command_manifest() -> Vec<ManifestEntry> {
    vec![
        ManifestEntry {
            command: "dbapps",
            source: "commands/dbapps.md",
            dest_name: "dbapps.md",
        },
        ManifestEntry {
            command: "dbapps",
            source: "commands/deploy_to_databricks_template.py",
            dest_name: "deploy_to_databricks_template.py",
        },
        ManifestEntry {
            command: "dbaiassistant",
            source: "commands/dbaiassistant.md",
            dest_name: "dbaiassistant.md",
        },
        ManifestEntry {
            command: "dbgeniespaces",
            source: "commands/dbgeniespaces.md",
            dest_name: "dbgeniespaces.md",
        },
        ManifestEntry {
            command: "dbtestrunner",
            source: "commands/dbtestrunner.md",
            dest_name: "dbtestrunner.md",
        },
    ]
}

/// The distinct slash commands provided by the manifest, in manifest order.
///
/// Used for the usage guidance printed after a successful install.
#[must_use]
pub fn slash_commands() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = Vec::new();
    for entry in command_manifest() {
        if !names.contains(&entry.command) {
            names.push(entry.command);
        }
    }
    names
}
