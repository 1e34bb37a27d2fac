//! # vext-target
//!
//! Browser target descriptors for the Vext build pipeline.
//!
//! Each supported browser family gets a descriptor naming its output
//! subdirectory and carrying its manifest overlay. Descriptors are static
//! and immutable; the overlay merger in `vext-config` turns them into
//! per-target build configurations.

pub mod target;
pub mod targets;

pub use target::{Result, TargetError, ensure_unique_subpaths, resolve_targets};
pub use targets::*;
