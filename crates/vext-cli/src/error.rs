//! Error handling for the Vext CLI.
//!
//! A single top-level `CliError` aggregates the library errors via `#[from]`
//! conversions; the binary boundary turns it into a miette diagnostic. Every
//! error here is fatal: the pipeline values fail-fast correctness over
//! partial output, since a misresolved profile or malformed manifest would
//! ship a broken or insecure extension.

use std::path::PathBuf;

use miette::Report;
use thiserror::Error;
use vext_config::ConfigError;
use vext_manifest::ManifestError;
use vext_target::TargetError;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (profile, version, project config)
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Manifest template or locale store errors
    #[error("manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// Target resolution and collision errors
    #[error("target error: {0}")]
    Target(#[from] TargetError),

    /// Invalid command-line arguments or options
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Directory traversal errors during asset copying
    #[error("asset copy error: {0}")]
    Walk(#[from] walkdir::Error),

    /// HTML shell rendering errors
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Convert CliError to a miette Report.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(ConfigError::UnknownProfile(id)) => miette::miette!(
            "unknown build profile: '{}'\n\nHint: valid profiles are development, beta, release",
            id
        ),
        CliError::Target(TargetError::UnknownTarget(name)) => miette::miette!(
            "unknown target: '{}'\n\nHint: built-in targets are chromium and gecko",
            name
        ),
        CliError::FileNotFound(path) => miette::miette!(
            "file not found: {}\n\nHint: check the project layout under the source directory",
            path.display()
        ),
        other => miette::miette!("{}", other),
    }
}
