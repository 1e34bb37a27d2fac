//! Logging infrastructure for the Vext CLI.
//!
//! Structured logging via the `tracing` ecosystem: `--verbose` for debug,
//! `--quiet` for errors only, `RUST_LOG` for custom filters.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the specified options.
///
/// Call once at the start of the program, before any logging occurs. The
/// level is determined in this order: `--verbose`, `--quiet`, `RUST_LOG`,
/// then an info-level default for the vext crates.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("vext=debug,vext_config=debug,vext_manifest=debug,vext_target=debug,vext_cli=debug")
    } else if quiet {
        EnvFilter::new("vext=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("vext=info,vext_config=info,vext_manifest=info,vext_cli=info")
        })
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
