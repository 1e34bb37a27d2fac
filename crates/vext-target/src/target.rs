//! Target resolution and error types.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use vext_config::TargetDescriptor;

use crate::targets;

/// Result type for target operations
pub type Result<T> = std::result::Result<T, TargetError>;

/// Error type for target operations
#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    #[error("unknown target: {0}")]
    UnknownTarget(String),

    #[error("targets '{first}' and '{second}' both write to '{}'", .subpath.display())]
    TargetCollision {
        first: String,
        second: String,
        subpath: PathBuf,
    },
}

/// Look up a built-in target by name.
pub fn builtin(name: &str) -> Option<TargetDescriptor> {
    match name {
        "chromium" => Some(targets::chromium()),
        "gecko" => Some(targets::gecko()),
        _ => None,
    }
}

/// Every built-in target, in build order.
pub fn default_targets() -> Vec<TargetDescriptor> {
    vec![targets::chromium(), targets::gecko()]
}

/// Resolve requested target names to descriptors.
///
/// An empty request means every built-in target. Unknown names are fatal.
pub fn resolve_targets(names: &[String]) -> Result<Vec<TargetDescriptor>> {
    if names.is_empty() {
        return Ok(default_targets());
    }
    names
        .iter()
        .map(|name| builtin(name).ok_or_else(|| TargetError::UnknownTarget(name.clone())))
        .collect()
}

/// Reject target sets whose output subpaths collide.
///
/// Two targets sharing a subpath would overwrite each other's artifacts;
/// the check runs before any pipeline work starts.
pub fn ensure_unique_subpaths(targets: &[TargetDescriptor]) -> Result<()> {
    let mut seen: HashMap<&Path, &str> = HashMap::new();
    for target in targets {
        if let Some(first) = seen.insert(target.output_subpath.as_path(), &target.name) {
            return Err(TargetError::TargetCollision {
                first: first.to_string(),
                second: target.name.clone(),
                subpath: target.output_subpath.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_request_resolves_every_builtin() {
        let targets = resolve_targets(&[]).unwrap();
        let names: Vec<&str> = targets.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["chromium", "gecko"]);
    }

    #[test]
    fn unknown_target_is_fatal() {
        let err = resolve_targets(&["safari".to_string()]).unwrap_err();
        assert!(matches!(err, TargetError::UnknownTarget(ref name) if name == "safari"));
    }

    #[test]
    fn builtin_subpaths_are_distinct() {
        ensure_unique_subpaths(&default_targets()).unwrap();
    }

    #[test]
    fn colliding_subpaths_are_rejected() {
        let twice = vec![targets::chromium(), targets::chromium()];
        let err = ensure_unique_subpaths(&twice).unwrap_err();
        assert!(matches!(err, TargetError::TargetCollision { .. }));
    }
}
