// maskform/src/main.rs
//! Maskform entry point.
//!
//! Parses the CLI, installs the logger, and dispatches to the selected
//! command.

use anyhow::Result;
use clap::Parser;

use maskform::cli::{Cli, Commands};
use maskform::commands;
use maskform::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if cli.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    match &cli.command {
        Commands::Validate(cmd) => commands::validate::run(cmd),
        Commands::Format(cmd) => commands::format::run(cmd),
        Commands::Mask(cmd) => commands::mask::run(cmd),
    }
}
