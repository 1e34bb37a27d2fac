//! Error types for configuration assembly and loading.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown build profile: {0}")]
    UnknownProfile(String),

    #[error("invalid package version '{value}': {source}")]
    InvalidVersion {
        value: String,
        source: semver::Error,
    },

    #[error("invalid config value: {field}: {hint}")]
    InvalidValue { field: String, hint: String },

    #[error("package.json not found: {}", .0.display())]
    PackageJsonNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
