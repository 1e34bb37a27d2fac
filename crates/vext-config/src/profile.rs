//! Build profiles and the resolved build environment.
//!
//! A profile is a release channel (development, beta, release) controlling
//! output-directory naming, the display-name suffix, and security-policy
//! laxity. The profile and the package version are resolved once at process
//! start into an [`EnvironmentContext`] which is passed explicitly to every
//! component that needs either.

use std::fmt;
use std::str::FromStr;

use semver::Version;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Release channel for a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Local development: relaxed CSP, "Dev" display suffix.
    Development,
    /// Pre-release channel: production policy, "Beta" display suffix.
    Beta,
    /// Store release: production policy, no display suffix.
    Release,
}

impl Profile {
    /// Every known profile, in channel order.
    pub const ALL: [Profile; 3] = [Profile::Development, Profile::Beta, Profile::Release];

    /// The identifier accepted on the command line and in `VEXT_PROFILE`.
    pub fn as_str(self) -> &'static str {
        match self {
            Profile::Development => "development",
            Profile::Beta => "beta",
            Profile::Release => "release",
        }
    }

    /// Name of the per-profile directory under the build root.
    pub fn output_dir_name(self) -> &'static str {
        match self {
            Profile::Development => "dev",
            Profile::Beta => "beta",
            Profile::Release => "release",
        }
    }

    /// Suffix appended to the product display name; empty for release.
    pub fn display_suffix(self) -> &'static str {
        match self {
            Profile::Development => "Dev",
            Profile::Beta => "Beta",
            Profile::Release => "",
        }
    }

    pub fn is_development(self) -> bool {
        matches!(self, Profile::Development)
    }
}

impl FromStr for Profile {
    type Err = ConfigError;

    /// Resolve a profile identifier.
    ///
    /// Unknown identifiers are a fatal configuration error. There is no
    /// fallback profile: an unrecognized channel cannot be assigned a safe
    /// output directory.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Profile::Development),
            "beta" => Ok(Profile::Beta),
            "release" => Ok(Profile::Release),
            other => Err(ConfigError::UnknownProfile(other.to_string())),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile plus package version, resolved once per build invocation.
///
/// Components never read the process environment themselves; the context is
/// built at startup and injected, so every consumer can be tested with a
/// synthetic context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentContext {
    pub profile: Profile,
    pub package_version: Version,
}

impl EnvironmentContext {
    pub fn new(profile: Profile, package_version: Version) -> Self {
        Self {
            profile,
            package_version,
        }
    }

    /// Parse a profile identifier and a package version string together.
    ///
    /// # Example
    ///
    /// ```
    /// use vext_config::{EnvironmentContext, Profile};
    ///
    /// let env = EnvironmentContext::resolve("beta", "1.2.3").unwrap();
    /// assert_eq!(env.profile, Profile::Beta);
    /// assert_eq!(env.package_version.to_string(), "1.2.3");
    /// ```
    pub fn resolve(profile_id: &str, package_version: &str) -> Result<Self, ConfigError> {
        let profile = profile_id.parse()?;
        let version =
            Version::parse(package_version).map_err(|source| ConfigError::InvalidVersion {
                value: package_version.to_string(),
                source,
            })?;
        Ok(Self::new(profile, version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_profiles_parse() {
        assert_eq!("development".parse::<Profile>().unwrap(), Profile::Development);
        assert_eq!("beta".parse::<Profile>().unwrap(), Profile::Beta);
        assert_eq!("release".parse::<Profile>().unwrap(), Profile::Release);
    }

    #[test]
    fn unknown_profile_is_fatal() {
        let err = "staging".parse::<Profile>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownProfile(ref id) if id == "staging"));
    }

    #[test]
    fn every_profile_has_an_output_dir() {
        for profile in Profile::ALL {
            assert!(!profile.output_dir_name().is_empty());
        }
    }

    #[test]
    fn release_has_no_display_suffix() {
        assert_eq!(Profile::Release.display_suffix(), "");
        assert_eq!(Profile::Development.display_suffix(), "Dev");
        assert_eq!(Profile::Beta.display_suffix(), "Beta");
    }

    #[test]
    fn resolve_rejects_bad_version() {
        let err = EnvironmentContext::resolve("release", "not-a-version").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVersion { ref value, .. } if value == "not-a-version"));
    }
}
