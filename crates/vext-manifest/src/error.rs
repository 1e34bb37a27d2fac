//! Error types for manifest transformation and locale lookup.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ManifestError>;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest template is not valid JSON: {0}")]
    InvalidManifest(#[source] serde_json::Error),

    #[error("manifest must be a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error("manifest template is missing required field '{0}'")]
    MissingField(&'static str),

    #[error("locale store missing or unreadable: {}", .0.display())]
    MissingLocaleStore(PathBuf),

    #[error("locale store has no '{0}' message")]
    MissingLocaleMessage(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
