//! Value merging and the target overlay merger.
//!
//! Overlay semantics are a contract here, not an accident of a merge
//! library: objects merge recursively, arrays and scalars replace. The same
//! rules apply to manifest overlays and to any future config layering.

use serde_json::Value;
use tracing::debug;

use crate::options::{BuildConfig, PluginSpec, TargetDescriptor};

/// Deep-merge `update` into `target`.
///
/// Object fields merge recursively; arrays and scalar values in `update`
/// replace the corresponding `target` value wholesale.
pub fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, Value::Object(update_map)) => {
            let mut new_obj = serde_json::Map::with_capacity(update_map.len());
            for (key, value) in update_map {
                new_obj.insert(key.clone(), value.clone());
            }
            *target_slot = Value::Object(new_obj);
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}

/// Derive a per-target configuration from the shared base.
///
/// The base is never mutated; each target receives an independent
/// configuration, so building multiple targets in one process cannot cause
/// cross-target interference. Field by field:
///
/// - `output.path` gains the target's output subpath
/// - the target's manifest diff is wired into the manifest-copy plugin's
///   parameters (the transformation itself runs later, at artifact build
///   time, not during merge)
/// - `extra_plugins` are appended after the base plugin list, so base
///   plugin ordering holds for every target
pub fn merge_target(base: &BuildConfig, target: &TargetDescriptor) -> BuildConfig {
    let mut merged = base.clone();
    merged.output.path = base.output.path.join(&target.output_subpath);

    if let Some(overlay) = &target.manifest_diff {
        for plugin in &mut merged.plugins {
            if let PluginSpec::CopyManifest { diff, .. } = plugin {
                *diff = Some(match diff.take() {
                    Some(mut existing) => {
                        merge_values(&mut existing, overlay);
                        existing
                    }
                    None => overlay.clone(),
                });
            }
        }
    }

    merged
        .plugins
        .extend(target.extra_plugins.iter().cloned());

    debug!(
        target_name = %target.name,
        output = %merged.output.path.display(),
        "merged target overlay"
    );
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn primitives_replace() {
        let mut base = json!({"a": 1, "b": 2});
        merge_values(&mut base, &json!({"b": 3}));
        assert_eq!(base, json!({"a": 1, "b": 3}));
    }

    #[test]
    fn objects_merge_recursively() {
        let mut base = json!({"outer": {"keep": true, "swap": 1}});
        merge_values(&mut base, &json!({"outer": {"swap": 2}}));
        assert_eq!(base, json!({"outer": {"keep": true, "swap": 2}}));
    }

    #[test]
    fn arrays_replace_wholesale() {
        let mut base = json!({"permissions": ["storage", "tabs"]});
        merge_values(&mut base, &json!({"permissions": ["storage"]}));
        assert_eq!(base, json!({"permissions": ["storage"]}));
    }

    #[test]
    fn object_overwrites_scalar() {
        let mut base = json!({"field": "scalar"});
        merge_values(&mut base, &json!({"field": {"nested": 1}}));
        assert_eq!(base, json!({"field": {"nested": 1}}));
    }
}
