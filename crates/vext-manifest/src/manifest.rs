//! Manifest parsing and the environment/target transformation.

use serde_json::{Map, Value};
use vext_config::{EnvironmentContext, merge_values};

use crate::error::{ManifestError, Result};

/// CSP override injected for development builds, permitting the script
/// evaluation that store channels forbid.
pub const RELAXED_EVAL_CSP: &str = "script-src 'self' 'unsafe-eval'; object-src 'self'";

/// Fields every manifest template must carry.
pub const REQUIRED_TEMPLATE_FIELDS: [&str; 4] =
    ["manifest_version", "name", "version", "permissions"];

/// A parsed extension manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest(Map<String, Value>);

impl Manifest {
    /// Parse manifest bytes; anything but a JSON object is fatal.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let value: Value =
            serde_json::from_slice(bytes).map_err(ManifestError::InvalidManifest)?;
        Self::from_value(value)
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ManifestError::NotAnObject(value_kind(&other))),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Check that the template carries the given descriptor fields.
    pub fn require_fields(&self, fields: &[&'static str]) -> Result<()> {
        for &field in fields {
            if !self.0.contains_key(field) {
                return Err(ManifestError::MissingField(field));
            }
        }
        Ok(())
    }

    /// Serialize with two-space indentation, for reproducible diffs when
    /// artifacts end up under version control.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(&self.0)?)
    }

    /// Apply the environment overlay, target diff, and stamps.
    ///
    /// Precedence, highest to lowest: stamped fields (`version`, optionally
    /// `name`) over the target diff over the development CSP overlay over
    /// the authored manifest fields. `version` is always overwritten, never
    /// inherited from the template.
    pub fn transform(
        mut self,
        diff: Option<&Value>,
        env: &EnvironmentContext,
        display_name: Option<&str>,
    ) -> Result<Vec<u8>> {
        if env.profile.is_development() {
            self.0.insert(
                "content_security_policy".to_string(),
                Value::String(RELAXED_EVAL_CSP.to_string()),
            );
        }

        if let Some(diff) = diff {
            let mut value = Value::Object(self.0);
            merge_values(&mut value, diff);
            self = Self::from_value(value)?;
        }

        self.0.insert(
            "version".to_string(),
            Value::String(env.package_version.to_string()),
        );
        if let Some(name) = display_name {
            self.0
                .insert("name".to_string(), Value::String(name.to_string()));
        }

        self.to_bytes()
    }
}

/// Transform raw manifest bytes for one (target, environment) pair.
///
/// A missing diff is not an error; it means no target-specific fields. A
/// malformed template aborts the build.
pub fn transform(
    template: &[u8],
    diff: Option<&Value>,
    env: &EnvironmentContext,
    display_name: Option<&str>,
) -> Result<Vec<u8>> {
    Manifest::parse(template)?.transform(diff, env, display_name)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_malformed_json() {
        let err = Manifest::parse(b"{not json").unwrap_err();
        assert!(matches!(err, ManifestError::InvalidManifest(_)));
    }

    #[test]
    fn parse_rejects_non_object() {
        let err = Manifest::parse(b"[1, 2, 3]").unwrap_err();
        assert!(matches!(err, ManifestError::NotAnObject("an array")));
    }

    #[test]
    fn require_fields_names_the_missing_one() {
        let manifest = Manifest::parse(br#"{"manifest_version": 3, "name": "Ext"}"#).unwrap();
        let err = manifest
            .require_fields(&REQUIRED_TEMPLATE_FIELDS)
            .unwrap_err();
        assert!(matches!(err, ManifestError::MissingField("version")));
    }

    #[test]
    fn to_bytes_uses_two_space_indentation() {
        let manifest = Manifest::parse(br#"{"manifest_version": 3}"#).unwrap();
        let bytes = manifest.to_bytes().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("\n  \"manifest_version\": 3"));
    }
}
