//! Artifact production: plugin execution and bundler invocation.
//!
//! The pipeline consumes a merged build configuration and materializes one
//! target's output directory: clean, manifest transform, asset copies, HTML
//! shells, then the bundler. Plugins run strictly in list order, so
//! clean-before-copy and copy-before-transform hold for every target.

mod bundler;
mod steps;

pub use bundler::{Bundler, CopyBundler};

use std::fs;

use tracing::debug;
use vext_config::{BuildConfig, EnvironmentContext, PluginSpec};
use vext_manifest::{Manifest, REQUIRED_TEMPLATE_FIELDS};

use crate::error::{CliError, Result};

/// Executes the plugin list of a merged configuration, then the bundler.
pub struct BuildPipeline<'a> {
    env: &'a EnvironmentContext,
    bundler: &'a dyn Bundler,
    display_name: Option<String>,
}

impl<'a> BuildPipeline<'a> {
    pub fn new(env: &'a EnvironmentContext, bundler: &'a dyn Bundler) -> Self {
        Self {
            env,
            bundler,
            display_name: None,
        }
    }

    /// Provide the display name used when a manifest copy step asks for
    /// name stamping.
    pub fn with_display_name(mut self, display_name: Option<String>) -> Self {
        self.display_name = display_name;
        self
    }

    /// Run every plugin in order, then hand the configuration to the
    /// bundler. The first failing step aborts the target.
    pub fn run(&self, config: &BuildConfig) -> Result<()> {
        for plugin in &config.plugins {
            self.run_plugin(plugin, config)?;
        }
        debug!(bundler = self.bundler.name(), "invoking bundler");
        self.bundler.bundle(config)
    }

    fn run_plugin(&self, plugin: &PluginSpec, config: &BuildConfig) -> Result<()> {
        match plugin {
            PluginSpec::CleanOutput => steps::clean_output(&config.output.path),
            PluginSpec::CopyManifest {
                from,
                to,
                diff,
                stamp_name,
            } => {
                let bytes = fs::read(from).map_err(|_| CliError::FileNotFound(from.clone()))?;
                let manifest = Manifest::parse(&bytes)?;
                manifest.require_fields(&REQUIRED_TEMPLATE_FIELDS)?;

                let display_name = if *stamp_name {
                    Some(self.display_name.as_deref().ok_or_else(|| {
                        CliError::Custom(
                            "name stamping requested but no display name resolved".to_string(),
                        )
                    })?)
                } else {
                    None
                };

                let transformed = manifest.transform(diff.as_ref(), self.env, display_name)?;
                let dest = config.output.path.join(to);
                fs::write(&dest, transformed)?;
                debug!(dest = %dest.display(), "wrote manifest");
                Ok(())
            }
            PluginSpec::CopyDir { from, to } => {
                steps::copy_dir(from, &config.output.path.join(to))
            }
            PluginSpec::HtmlShell {
                template,
                filename,
                chunk,
            } => steps::render_html_shell(
                template,
                &config.output.path.join(filename),
                chunk,
                &config.output.filename_for(chunk),
            ),
        }
    }
}
