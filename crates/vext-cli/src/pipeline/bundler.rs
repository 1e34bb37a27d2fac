//! The bundler seam.
//!
//! Compilation is an external engine; the pipeline only hands it the merged
//! configuration. Anything implementing [`Bundler`] can sit behind the seam.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use vext_config::BuildConfig;

use crate::error::{CliError, Result};

/// Consumes a merged build configuration and produces compiled entry
/// bundles in the output directory.
pub trait Bundler {
    fn name(&self) -> &'static str;

    fn bundle(&self, config: &BuildConfig) -> Result<()>;
}

/// Minimal engine that copies each entry's source verbatim.
///
/// Stands in for a real bundling engine: resolves each entry to its index
/// module and writes it out under the configured filename pattern, without
/// transpilation or module resolution.
pub struct CopyBundler;

impl Bundler for CopyBundler {
    fn name(&self) -> &'static str {
        "copy"
    }

    fn bundle(&self, config: &BuildConfig) -> Result<()> {
        for (name, entry) in &config.entries {
            let source = resolve_entry(entry)?;
            let dest = config.output.path.join(config.output.filename_for(name));
            fs::copy(&source, &dest)?;
            debug!(entry = %name, dest = %dest.display(), "emitted entry bundle");
        }
        Ok(())
    }
}

/// Resolve an entry path to a concrete module file.
fn resolve_entry(path: &Path) -> Result<PathBuf> {
    if path.is_file() {
        return Ok(path.to_path_buf());
    }
    for candidate in ["index.js", "index.jsx"] {
        let module = path.join(candidate);
        if module.is_file() {
            return Ok(module);
        }
    }
    Err(CliError::FileNotFound(path.join("index.js")))
}
