//! Extension manifest handling: parsing, environment stamping, target
//! overlays, and the locale-backed display name.
//!
//! The transformation is a pure function of its inputs (template bytes,
//! target diff, environment context, optional display name): repeated
//! invocation with identical inputs yields byte-identical output, which
//! keeps builds cache-friendly.

pub mod error;
pub mod locale;
pub mod manifest;

pub use error::{ManifestError, Result};
pub use locale::LocaleNameProvider;
pub use manifest::{Manifest, REQUIRED_TEMPLATE_FIELDS, RELAXED_EVAL_CSP, transform};
