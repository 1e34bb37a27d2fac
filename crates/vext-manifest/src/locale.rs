//! Display-name resolution from the extension's locale message store.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;
use vext_config::Profile;

use crate::error::{ManifestError, Result};

/// Resolves the product's base display name from a locale message store.
///
/// The store is the usual `_locales/<locale>/messages.json` mapping; the
/// provider only needs its `name.message` field. It can also be constructed
/// from a pre-loaded value, which keeps unit tests off the filesystem.
#[derive(Debug, Clone)]
pub struct LocaleNameProvider {
    name: String,
}

impl LocaleNameProvider {
    /// Load the message store from disk.
    ///
    /// A store that is absent, unreadable, or malformed is fatal: a build
    /// that asked for name stamping cannot proceed without it.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|_| ManifestError::MissingLocaleStore(path.to_path_buf()))?;
        let value: Value = serde_json::from_str(&content)
            .map_err(|_| ManifestError::MissingLocaleStore(path.to_path_buf()))?;
        let provider = Self::from_value(&value)?;
        debug!(path = %path.display(), name = %provider.name, "resolved product name");
        Ok(provider)
    }

    /// Build a provider from an already-parsed message store.
    pub fn from_value(value: &Value) -> Result<Self> {
        let name = value
            .get("name")
            .and_then(|n| n.get("message"))
            .and_then(Value::as_str)
            .ok_or_else(|| ManifestError::MissingLocaleMessage("name.message".to_string()))?;
        Ok(Self {
            name: name.to_string(),
        })
    }

    pub fn base_name(&self) -> &str {
        &self.name
    }

    /// Product name plus profile suffix, with no trailing space when the
    /// suffix is empty.
    pub fn display_name(&self, profile: Profile) -> String {
        let suffix = profile.display_suffix();
        if suffix.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, suffix)
        }
    }
}
