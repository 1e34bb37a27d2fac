//! Platform-agnostic base configuration assembly.
//!
//! The base configuration carries everything the targets share: the four
//! logical entry points, the per-profile output location, module rules, and
//! the shared plugin ordering. Target-specific differences are layered on
//! afterwards by [`crate::merge::merge_target`].

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::discovery::ManifestSettings;
use crate::options::{
    BuildConfig, Loader, ModuleRule, OutputOptions, PluginSpec,
};
use crate::profile::EnvironmentContext;

/// Logical entry roles of an extension source tree.
pub const ENTRIES: [&str; 4] = ["background", "options", "popup", "content-scripts"];

/// Entries that get an HTML shell of their own.
pub const UI_ENTRIES: [&str; 3] = ["background", "options", "popup"];

/// Well-known paths of an extension project.
///
/// The layout is rooted at the project directory; the source and build
/// directories can be overridden through the project config.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
    source_dir: PathBuf,
    build_dir: PathBuf,
    locale: String,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::from_config(root, &crate::discovery::ProjectConfig::default())
    }

    pub fn from_config(root: impl Into<PathBuf>, config: &crate::discovery::ProjectConfig) -> Self {
        Self {
            root: root.into(),
            source_dir: config
                .source_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from("src")),
            build_dir: config
                .build_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from("build")),
            locale: config.locale.clone().unwrap_or_else(|| "en".to_string()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn source_dir(&self) -> PathBuf {
        self.root.join(&self.source_dir)
    }

    /// Root of all build output, before the profile directory is appended.
    pub fn build_root(&self) -> PathBuf {
        self.root.join(&self.build_dir)
    }

    pub fn entry_dir(&self, name: &str) -> PathBuf {
        self.source_dir().join(name)
    }

    pub fn entry_html(&self, name: &str) -> PathBuf {
        self.entry_dir(name).join("index.html")
    }

    pub fn manifest_template(&self) -> PathBuf {
        self.source_dir().join("manifest.json")
    }

    /// Per-target manifest overlay file, e.g. `src/manifest.gecko.json`.
    pub fn target_manifest_diff(&self, target: &str) -> PathBuf {
        self.source_dir().join(format!("manifest.{target}.json"))
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.source_dir().join("assets")
    }

    pub fn locales_dir(&self) -> PathBuf {
        self.source_dir().join("_locales")
    }

    /// The message store the display name is read from.
    pub fn locale_store(&self) -> PathBuf {
        self.locales_dir().join(&self.locale).join("messages.json")
    }

    pub fn package_json(&self) -> PathBuf {
        self.root.join("package.json")
    }
}

/// Assemble the platform-agnostic build configuration.
///
/// Deterministic: the same environment and layout always yield a
/// structurally identical configuration. Entry order and plugin order are
/// fixed, never derived from unordered iteration.
pub fn base_config(
    env: &EnvironmentContext,
    layout: &ProjectLayout,
    manifest: &ManifestSettings,
) -> BuildConfig {
    let mut entries = IndexMap::new();
    for name in ENTRIES {
        entries.insert(name.to_string(), layout.entry_dir(name));
    }

    let mut plugins = vec![
        PluginSpec::CleanOutput,
        PluginSpec::CopyManifest {
            from: layout.manifest_template(),
            to: PathBuf::from("manifest.json"),
            diff: None,
            stamp_name: manifest.stamp_name,
        },
        PluginSpec::CopyDir {
            from: layout.assets_dir(),
            to: PathBuf::from("assets"),
        },
        PluginSpec::CopyDir {
            from: layout.locales_dir(),
            to: PathBuf::from("_locales"),
        },
    ];
    for name in UI_ENTRIES {
        plugins.push(PluginSpec::HtmlShell {
            template: layout.entry_html(name),
            filename: format!("{name}.html"),
            chunk: name.to_string(),
        });
    }

    BuildConfig {
        mode: env.profile.into(),
        entries,
        output: OutputOptions {
            path: layout.build_root().join(env.profile.output_dir_name()),
            filename: "[name].js".to_string(),
        },
        rules: vec![
            ModuleRule {
                test: "js|jsx".to_string(),
                loader: Loader::Script,
            },
            ModuleRule {
                test: "css".to_string(),
                loader: Loader::Style,
            },
        ],
        plugins,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::BuildMode;
    use crate::profile::{EnvironmentContext, Profile};
    use semver::Version;

    fn env(profile: Profile) -> EnvironmentContext {
        EnvironmentContext::new(profile, Version::new(1, 0, 0))
    }

    #[test]
    fn base_config_is_deterministic() {
        let layout = ProjectLayout::new("/project");
        let settings = ManifestSettings::default();
        let a = base_config(&env(Profile::Development), &layout, &settings);
        let b = base_config(&env(Profile::Development), &layout, &settings);
        assert_eq!(a, b);
    }

    #[test]
    fn output_path_includes_profile_dir() {
        let layout = ProjectLayout::new("/project");
        let settings = ManifestSettings::default();
        let dev = base_config(&env(Profile::Development), &layout, &settings);
        let release = base_config(&env(Profile::Release), &layout, &settings);
        assert_eq!(dev.output.path, PathBuf::from("/project/build/dev"));
        assert_eq!(release.output.path, PathBuf::from("/project/build/release"));
    }

    #[test]
    fn entries_cover_all_roles_in_order() {
        let layout = ProjectLayout::new("/project");
        let config = base_config(&env(Profile::Beta), &layout, &ManifestSettings::default());
        let keys: Vec<&str> = config.entries.keys().map(String::as_str).collect();
        assert_eq!(keys, ENTRIES);
    }

    #[test]
    fn clean_runs_before_any_copy() {
        let layout = ProjectLayout::new("/project");
        let config = base_config(&env(Profile::Beta), &layout, &ManifestSettings::default());
        assert_eq!(config.plugins[0], PluginSpec::CleanOutput);
        assert!(matches!(
            config.plugins[1],
            PluginSpec::CopyManifest { .. }
        ));
    }

    #[test]
    fn mode_tracks_profile() {
        let layout = ProjectLayout::new("/project");
        let settings = ManifestSettings::default();
        let dev = base_config(&env(Profile::Development), &layout, &settings);
        let beta = base_config(&env(Profile::Beta), &layout, &settings);
        assert_eq!(dev.mode, BuildMode::Development);
        assert_eq!(beta.mode, BuildMode::Production);
    }
}
