//! Individual pipeline steps: cleaning, copying, HTML shells.

use std::fs;
use std::path::Path;

use minijinja::{Environment, context};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{CliError, Result};

/// Remove and recreate an output directory.
pub fn clean_output(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_dir_all(path)?;
    }
    fs::create_dir_all(path)?;
    debug!(path = %path.display(), "cleaned output directory");
    Ok(())
}

/// Recursively copy a directory, mirroring its structure.
pub fn copy_dir(from: &Path, to: &Path) -> Result<()> {
    if !from.is_dir() {
        return Err(CliError::FileNotFound(from.to_path_buf()));
    }

    for entry in WalkDir::new(from) {
        let entry = entry?;
        let rel = entry
            .path()
            .strip_prefix(from)
            .map_err(|e| CliError::Custom(format!("path escaped copy root: {e}")))?;
        let dest = to.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)?;
        } else {
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &dest)?;
        }
    }
    Ok(())
}

/// Render an entry's HTML shell.
///
/// The template sees `chunk` (the entry name) and `script` (the compiled
/// bundle filename) in its context.
pub fn render_html_shell(template: &Path, dest: &Path, chunk: &str, script: &str) -> Result<()> {
    let source = fs::read_to_string(template)
        .map_err(|_| CliError::FileNotFound(template.to_path_buf()))?;

    let env = Environment::new();
    let html = env.render_str(&source, context! { chunk, script })?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, html)?;
    debug!(dest = %dest.display(), "rendered html shell");
    Ok(())
}
