//! Project loading: root resolution, config discovery, target selection.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;
use vext_config::{
    ConfigDiscovery, ProjectConfig, ProjectLayout, TargetDescriptor, Version, merge_values,
};
use vext_target::{ensure_unique_subpaths, resolve_targets};

use crate::error::{CliError, Result};

/// A loaded extension project: layout, config, and package version.
#[derive(Debug)]
pub struct Project {
    pub layout: ProjectLayout,
    pub config: ProjectConfig,
    pub version: Version,
}

impl Project {
    /// Open the project rooted at `cwd` (or the current directory).
    ///
    /// Reads the optional project config and the package version. The
    /// version read happens once, before any target-specific work.
    pub fn open(cwd: Option<&Path>) -> Result<Self> {
        let root = match cwd {
            Some(dir) => dir.to_path_buf(),
            None => std::env::current_dir()?,
        };
        if !root.is_dir() {
            return Err(CliError::FileNotFound(root));
        }

        let discovery = ConfigDiscovery::new(&root);
        let config = discovery.load()?;
        let version = discovery.package_version()?;
        let layout = ProjectLayout::from_config(&root, &config);
        debug!(root = %layout.root().display(), %version, "opened project");

        Ok(Self {
            layout,
            config,
            version,
        })
    }

    /// Resolve the targets for this invocation.
    ///
    /// Explicitly requested targets win over the project config's list; an
    /// empty selection means every built-in target. Output subpaths are
    /// checked for collisions before any pipeline work, and each target's
    /// manifest overlay file is attached when present.
    pub fn resolve_targets(&self, requested: &[String]) -> Result<Vec<TargetDescriptor>> {
        let names = if requested.is_empty() {
            &self.config.targets
        } else {
            requested
        };

        let mut targets = resolve_targets(names)?;
        ensure_unique_subpaths(&targets)?;
        self.attach_manifest_diffs(&mut targets)?;
        Ok(targets)
    }

    /// Merge `src/manifest.<target>.json` overlays into the descriptors.
    fn attach_manifest_diffs(&self, targets: &mut [TargetDescriptor]) -> Result<()> {
        for target in targets {
            let diff_path = self.layout.target_manifest_diff(&target.name);
            if !diff_path.exists() {
                continue;
            }

            let content = fs::read_to_string(&diff_path)?;
            let overlay: Value = serde_json::from_str(&content)?;
            debug!(name = %target.name, path = %diff_path.display(), "attached manifest overlay");

            target.manifest_diff = Some(match target.manifest_diff.take() {
                Some(mut existing) => {
                    merge_values(&mut existing, &overlay);
                    existing
                }
                None => overlay,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_package_json(root: &Path) {
        fs::write(
            root.join("package.json"),
            r#"{"name": "fixture", "version": "1.2.3"}"#,
        )
        .unwrap();
    }

    #[test]
    fn open_requires_a_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = Project::open(Some(&missing)).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn open_reads_the_package_version() {
        let dir = TempDir::new().unwrap();
        write_package_json(dir.path());

        let project = Project::open(Some(dir.path())).unwrap();
        assert_eq!(project.version.to_string(), "1.2.3");
    }

    #[test]
    fn explicit_targets_win_over_config() {
        let dir = TempDir::new().unwrap();
        write_package_json(dir.path());
        fs::write(dir.path().join("vext.toml"), "targets = [\"gecko\"]\n").unwrap();

        let project = Project::open(Some(dir.path())).unwrap();
        let targets = project
            .resolve_targets(&["chromium".to_string()])
            .unwrap();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].name, "chromium");
    }

    #[test]
    fn duplicate_target_request_collides() {
        let dir = TempDir::new().unwrap();
        write_package_json(dir.path());

        let project = Project::open(Some(dir.path())).unwrap();
        let err = project
            .resolve_targets(&["chromium".to_string(), "chromium".to_string()])
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::Target(vext_target::TargetError::TargetCollision { .. })
        ));
    }

    #[test]
    fn overlay_file_is_attached_to_its_target() {
        let dir = TempDir::new().unwrap();
        write_package_json(dir.path());
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(
            dir.path().join("src/manifest.gecko.json"),
            r#"{"browser_specific_settings": {"gecko": {"id": "ext@example.org"}}}"#,
        )
        .unwrap();

        let project = Project::open(Some(dir.path())).unwrap();
        let targets = project.resolve_targets(&[]).unwrap();

        let gecko = targets.iter().find(|t| t.name == "gecko").unwrap();
        assert!(gecko.manifest_diff.is_some());
        let chromium = targets.iter().find(|t| t.name == "chromium").unwrap();
        assert!(chromium.manifest_diff.is_none());
    }

    #[test]
    fn malformed_overlay_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        write_package_json(dir.path());
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/manifest.chromium.json"), "{oops").unwrap();

        let project = Project::open(Some(dir.path())).unwrap();
        let err = project.resolve_targets(&[]).unwrap_err();
        assert!(matches!(err, CliError::Json(_)));
    }
}
