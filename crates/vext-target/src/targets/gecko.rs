//! Gecko-family target.

use std::path::PathBuf;

use vext_config::TargetDescriptor;

/// Target descriptor for Gecko-family browsers (Firefox).
///
/// Artifacts land under the `gecko` subdirectory. Gecko manifests usually
/// need a `browser_specific_settings` block with the add-on id; projects
/// supply it through `src/manifest.gecko.json`.
pub fn gecko() -> TargetDescriptor {
    TargetDescriptor {
        name: "gecko".to_string(),
        output_subpath: PathBuf::from("gecko"),
        manifest_diff: None,
        extra_plugins: Vec::new(),
    }
}
