//! The build configuration handed to the bundling engine.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

use crate::profile::Profile;

/// Build mode forwarded to the bundling engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    #[default]
    Development,
    Production,
}

impl From<Profile> for BuildMode {
    fn from(profile: Profile) -> Self {
        if profile.is_development() {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }
}

/// Loader applied by a module rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Loader {
    /// Script transpilation (js, jsx).
    Script,
    /// Style bundling (css).
    Style,
}

/// A module transformation rule: which extensions, which loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleRule {
    /// Extension set the rule applies to, e.g. `"js|jsx"`.
    pub test: String,
    pub loader: Loader,
}

/// Output location and filename pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputOptions {
    pub path: PathBuf,
    /// Per-entry filename pattern; `[name]` expands to the entry key.
    pub filename: String,
}

impl OutputOptions {
    /// Expand the filename pattern for one entry.
    pub fn filename_for(&self, entry: &str) -> String {
        self.filename.replace("[name]", entry)
    }
}

/// A declarative build-plugin configuration.
///
/// Plugins run in list order during artifact production; the shared plugins
/// always precede target-specific extras, so clean-before-copy and
/// copy-before-transform ordering holds for every target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "plugin", rename_all = "kebab-case")]
pub enum PluginSpec {
    /// Remove and recreate the output directory.
    CleanOutput,
    /// Copy the manifest template into the output, transformed for the
    /// current environment and target.
    CopyManifest {
        from: PathBuf,
        to: PathBuf,
        /// Target-specific manifest overlay, wired in by the overlay merger.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        diff: Option<Value>,
        /// Stamp `name` from the locale store instead of keeping the
        /// authored value.
        #[serde(default)]
        stamp_name: bool,
    },
    /// Recursively copy a directory into the output.
    CopyDir { from: PathBuf, to: PathBuf },
    /// Render an HTML shell for one entry point.
    HtmlShell {
        template: PathBuf,
        filename: String,
        chunk: String,
    },
}

/// The fully assembled, ready-to-bundle configuration for one target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    pub mode: BuildMode,

    /// Entry points keyed by logical role; insertion order is preserved.
    pub entries: IndexMap<String, PathBuf>,

    pub output: OutputOptions,

    /// Module transformation rules, applied in order.
    pub rules: Vec<ModuleRule>,

    /// Ordered plugin list; base plugins first, target extras appended.
    pub plugins: Vec<PluginSpec>,
}

/// A browser target: output subpath, manifest overlay, extra plugins.
///
/// Descriptors are defined statically per target and never mutated; the
/// overlay merger reads them to derive a per-target [`BuildConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetDescriptor {
    pub name: String,

    /// Subdirectory under the profile output root. Must be unique across
    /// the targets of one build session.
    pub output_subpath: PathBuf,

    /// Partial manifest overlaid onto the template for this target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_diff: Option<Value>,

    /// Plugins appended after the shared plugin list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_plugins: Vec<PluginSpec>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_pattern_expands_entry_name() {
        let output = OutputOptions {
            path: PathBuf::from("build/dev"),
            filename: "[name].js".to_string(),
        };
        assert_eq!(output.filename_for("background"), "background.js");
    }

    #[test]
    fn mode_follows_profile() {
        assert_eq!(BuildMode::from(Profile::Development), BuildMode::Development);
        assert_eq!(BuildMode::from(Profile::Beta), BuildMode::Production);
        assert_eq!(BuildMode::from(Profile::Release), BuildMode::Production);
    }
}
