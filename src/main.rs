//! Binary entry point for the `dbcommands` installer.
use anyhow::Result;
use clap::Parser;

use dbcommands_cli::logging::Logger;
use dbcommands_cli::{cli, commands, logging};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();

    // Zero-argument invocation performs a plain install.
    match args.command.unwrap_or_default() {
        cli::Command::Install => {
            logging::init_subscriber(args.verbose, "install");
            let log = std::sync::Arc::new(Logger::new("install"));
            commands::install::run(&args.global, &log)
        }
        cli::Command::Version => {
            let version = option_env!("DBCOMMANDS_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
            #[allow(clippy::print_stdout)]
            {
                println!("dbcommands {version}");
            }
            Ok(())
        }
    }
}
