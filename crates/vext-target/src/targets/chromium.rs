//! Chromium-family target.

use std::path::PathBuf;

use vext_config::TargetDescriptor;

/// Target descriptor for Chromium-family browsers (Chrome, Edge, Brave).
///
/// Artifacts land under the `chromium` subdirectory. The descriptor carries
/// no manifest overlay of its own; a project supplies one through
/// `src/manifest.chromium.json` when its chromium manifest differs from the
/// shared template.
pub fn chromium() -> TargetDescriptor {
    TargetDescriptor {
        name: "chromium".to_string(),
        output_subpath: PathBuf::from("chromium"),
        manifest_diff: None,
        extra_plugins: Vec::new(),
    }
}
