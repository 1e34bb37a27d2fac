//! Command-line interface definition for Vext.
//!
//! The CLI is defined with clap v4 derive macros: global output flags plus
//! `build` and `check` subcommands.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Vext - a build pipeline for browser extensions
#[derive(Parser, Debug)]
#[command(
    name = "vext",
    version,
    about = "Build browser-extension artifacts for multiple targets",
    long_about = "Vext produces browser-extension build artifacts for multiple target\n\
                  browsers and release profiles from one shared source tree. Each target\n\
                  gets its own output directory and its own transformed manifest."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available Vext subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build extension artifacts for the selected targets
    ///
    /// Derives one build configuration per target from the shared base,
    /// transforms the manifest for the selected profile, and produces a
    /// complete artifact directory per target.
    Build(BuildArgs),

    /// Validate project configuration without building
    ///
    /// Checks the manifest template, target selection, package version, and
    /// (when name stamping is enabled) the locale message store.
    Check(CheckArgs),
}

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Release profile: development, beta, or release
    ///
    /// Falls back to the VEXT_PROFILE environment variable when omitted.
    /// An unrecognized profile aborts the build; there is no default.
    #[arg(short, long, value_name = "PROFILE")]
    pub profile: Option<String>,

    /// Target to build (repeatable)
    ///
    /// Defaults to the targets configured for the project, or every
    /// built-in target when the project does not pin any.
    ///
    /// Examples:
    ///   vext build --profile release --target chromium
    ///   vext build --profile beta --target chromium --target gecko
    #[arg(short, long, value_name = "TARGET")]
    pub target: Vec<String>,

    /// Project root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Project root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}
