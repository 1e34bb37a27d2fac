//! Vext CLI - browser extension builds with Rust plumbing.
//!
//! This is the main entry point for the Vext CLI. It handles command-line
//! argument parsing, logging initialization, and command dispatch.

use clap::Parser;
use miette::Result;
use vext_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = cli::Cli::parse();

    // Initialize logging and colors based on global flags
    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors();

    // Execute the appropriate command
    let result = match args.command {
        cli::Command::Build(build_args) => commands::build_execute(build_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
    };

    // Convert CLI errors to miette diagnostics for readable error reporting
    result.map_err(error::cli_error_to_miette)
}
