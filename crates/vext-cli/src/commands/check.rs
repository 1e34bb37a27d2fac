//! Check command implementation.
//!
//! Validates project configuration without producing artifacts.

use std::fs;

use vext_manifest::{LocaleNameProvider, Manifest, REQUIRED_TEMPLATE_FIELDS};

use crate::cli::CheckArgs;
use crate::error::{CliError, Result};
use crate::project::Project;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Open the project (config parse, package version parse)
/// 2. Parse the manifest template and check its required fields
/// 3. Resolve the configured targets (collision check, overlay parse)
/// 4. Load the locale store when name stamping is configured
pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking project configuration...");
    let project = Project::open(args.cwd.as_deref())?;

    let template_path = project.layout.manifest_template();
    let bytes =
        fs::read(&template_path).map_err(|_| CliError::FileNotFound(template_path.clone()))?;
    let manifest = Manifest::parse(&bytes)?;
    manifest.require_fields(&REQUIRED_TEMPLATE_FIELDS)?;
    ui::info(&format!(
        "Manifest template ok: {}",
        template_path.display()
    ));

    let targets = project.resolve_targets(&[])?;
    ui::info(&format!(
        "Targets: {}",
        targets
            .iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    ));

    if project.config.manifest.stamp_name {
        let provider = LocaleNameProvider::load(&project.layout.locale_store())?;
        ui::info(&format!("Display name base: {}", provider.base_name()));
    }

    ui::success("No problems found");
    Ok(())
}
