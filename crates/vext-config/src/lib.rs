//! Core build-configuration types shared across Vext crates.
//!
//! This crate owns the composition side of the build: release profiles and
//! the resolved environment context, the platform-agnostic base
//! configuration, and the target overlay merger that derives one final
//! configuration per browser target. Artifact production (plugin execution,
//! bundler invocation) lives in `vext-cli`.

pub mod base;
pub mod discovery;
pub mod error;
pub mod merge;
pub mod options;
pub mod profile;

// Re-export main types
pub use base::{ENTRIES, ProjectLayout, UI_ENTRIES, base_config};
pub use discovery::{ConfigDiscovery, ManifestSettings, ProjectConfig};
pub use error::{ConfigError, Result};
pub use merge::{merge_target, merge_values};
pub use options::*;
pub use profile::{EnvironmentContext, Profile};

// Package versions are semver throughout
pub use semver::Version;
