//! Project configuration discovery.
//!
//! Finds and loads the optional Vext project configuration from the
//! conventional locations, and reads the package version that gets stamped
//! into manifests.

use std::fs;
use std::path::{Path, PathBuf};

use semver::Version;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{ConfigError, Result};

/// Manifest handling knobs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManifestSettings {
    /// Stamp the manifest `name` from the locale store plus profile suffix.
    /// When off, the authored `name` field survives untouched.
    #[serde(default)]
    pub stamp_name: bool,
}

/// Per-project configuration, all fields optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Targets built when none are requested explicitly. Empty means every
    /// built-in target.
    #[serde(default)]
    pub targets: Vec<String>,

    #[serde(default)]
    pub manifest: ManifestSettings,

    /// Source tree root relative to the project root (default `src`).
    #[serde(default)]
    pub source_dir: Option<PathBuf>,

    /// Build output root relative to the project root (default `build`).
    #[serde(default)]
    pub build_dir: Option<PathBuf>,

    /// Locale whose message store provides the display name (default `en`).
    #[serde(default)]
    pub locale: Option<String>,
}

/// File-based configuration discovery.
///
/// Searches for project configuration in conventional locations. Absence of
/// a config file is not an error: everything has a default.
///
/// # Example
///
/// ```no_run
/// use vext_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory.
    ///
    /// Searches in this order:
    /// 1. `vext.toml`
    /// 2. `package.json` (`vext` field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join("vext.toml");
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        if pkg_path.exists() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed.get("vext").is_some_and(|v| !v.is_null()) {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load the project config, falling back to defaults when no config
    /// file exists.
    pub fn load(&self) -> Result<ProjectConfig> {
        match self.find() {
            Some(path) => {
                debug!(path = %path.display(), "loading project config");
                self.load_from(&path)
            }
            None => Ok(ProjectConfig::default()),
        }
    }

    /// Read the package version stamped into manifests.
    ///
    /// The version lives in `package.json` next to the extension sources;
    /// a missing or unparseable version is fatal, since every produced
    /// manifest must carry it.
    pub fn package_version(&self) -> Result<Version> {
        let path = self.root.join("package.json");
        let content = fs::read_to_string(&path)
            .map_err(|_| ConfigError::PackageJsonNotFound(path.clone()))?;

        let parsed: Value =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                field: "package.json".to_string(),
                hint: format!("invalid JSON: {e}"),
            })?;

        let raw = parsed
            .get("version")
            .and_then(Value::as_str)
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "version".to_string(),
                hint: "package.json must carry a string version".to_string(),
            })?;

        Version::parse(raw).map_err(|source| ConfigError::InvalidVersion {
            value: raw.to_string(),
            source,
        })
    }

    fn load_from(&self, path: &Path) -> Result<ProjectConfig> {
        if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
            return self.load_from_package_json(path);
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ConfigError::InvalidValue {
            field: "vext.toml".to_string(),
            hint: format!("invalid TOML: {e}"),
        })
    }

    fn load_from_package_json(&self, path: &Path) -> Result<ProjectConfig> {
        let content = fs::read_to_string(path)?;

        let parsed: Value =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                field: "package.json".to_string(),
                hint: format!("invalid JSON: {e}"),
            })?;

        let vext_value = parsed
            .get("vext")
            .filter(|v| !v.is_null())
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "vext".to_string(),
                hint: "add a 'vext' field to package.json".to_string(),
            })?;

        serde_json::from_value(vext_value.clone()).map_err(|e| ConfigError::InvalidValue {
            field: "vext".to_string(),
            hint: e.to_string(),
        })
    }
}
