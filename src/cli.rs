//! Command-line argument definitions.
use clap::{Parser, Subcommand};

/// Top-level CLI entry point for the slash-command installer.
#[derive(Parser, Debug)]
#[command(
    name = "dbcommands",
    about = "Installer for Databricks slash-command templates",
    version
)]
pub struct Cli {
    /// Subcommand to run; `install` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared across all subcommands.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Pull the latest repository changes before installing
    #[arg(short, long, global = true)]
    pub update: bool,

    /// Preview changes without applying
    #[arg(short = 'd', long, global = true)]
    pub dry_run: bool,

    /// Override the command repository root directory
    #[arg(long, global = true)]
    pub root: Option<std::path::PathBuf>,

    /// Override the destination directory (default: ~/.claude/commands)
    #[arg(long, global = true)]
    pub dest: Option<std::path::PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, Copy, Default)]
pub enum Command {
    /// Install the slash-command templates
    #[default]
    Install,
    /// Print version information
    Version,
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_no_arguments_defaults_to_install() {
        let cli = Cli::parse_from(["dbcommands"]);
        assert!(cli.command.is_none());
        assert!(matches!(cli.command.unwrap_or_default(), Command::Install));
    }

    #[test]
    fn parse_explicit_install() {
        let cli = Cli::parse_from(["dbcommands", "install"]);
        assert!(matches!(cli.command, Some(Command::Install)));
    }

    #[test]
    fn parse_update_flag() {
        let cli = Cli::parse_from(["dbcommands", "--update"]);
        assert!(cli.global.update);
    }

    #[test]
    fn parse_update_flag_short() {
        let cli = Cli::parse_from(["dbcommands", "-u"]);
        assert!(cli.global.update);
    }

    #[test]
    fn parse_update_after_subcommand() {
        let cli = Cli::parse_from(["dbcommands", "install", "--update"]);
        assert!(cli.global.update);
    }

    #[test]
    fn parse_dry_run() {
        let cli = Cli::parse_from(["dbcommands", "--dry-run"]);
        assert!(cli.global.dry_run);
    }

    #[test]
    fn parse_dry_run_short() {
        let cli = Cli::parse_from(["dbcommands", "-d"]);
        assert!(cli.global.dry_run);
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::parse_from(["dbcommands", "-v"]);
        assert!(cli.verbose);
    }

    #[test]
    fn parse_version() {
        let cli = Cli::parse_from(["dbcommands", "version"]);
        assert!(matches!(cli.command, Some(Command::Version)));
    }

    #[test]
    fn parse_root_override() {
        let cli = Cli::parse_from(["dbcommands", "--root", "/tmp/commands-repo"]);
        assert_eq!(
            cli.global.root,
            Some(std::path::PathBuf::from("/tmp/commands-repo"))
        );
    }

    #[test]
    fn parse_dest_override() {
        let cli = Cli::parse_from(["dbcommands", "--dest", "/tmp/claude/commands"]);
        assert_eq!(
            cli.global.dest,
            Some(std::path::PathBuf::from("/tmp/claude/commands"))
        );
    }

    #[test]
    fn update_and_dry_run_default_to_off() {
        let cli = Cli::parse_from(["dbcommands"]);
        assert!(!cli.global.update);
        assert!(!cli.global.dry_run);
    }
}
