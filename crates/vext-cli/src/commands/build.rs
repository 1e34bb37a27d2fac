//! Build command implementation.
//!
//! Builds every requested target from the shared base configuration.
//! Failure policy is fail-fast: all targets share the base, so a broken
//! base would make every artifact equally invalid; the first failing
//! target aborts the invocation.

use std::time::Instant;

use vext_config::{EnvironmentContext, Profile, base_config, merge_target};
use vext_manifest::LocaleNameProvider;

use crate::cli::BuildArgs;
use crate::error::{CliError, Result};
use crate::pipeline::{BuildPipeline, CopyBundler};
use crate::project::Project;
use crate::ui;

/// Execute the build command.
///
/// # Build Process
///
/// 1. Open the project (config discovery, package version)
/// 2. Resolve the environment once: profile + package version
/// 3. Resolve targets and reject output-subpath collisions
/// 4. Resolve the display name when name stamping is configured
/// 5. Merge the overlay and run the pipeline, one target at a time
pub fn execute(args: BuildArgs) -> Result<()> {
    let start_time = Instant::now();

    ui::info("Loading project...");
    let project = Project::open(args.cwd.as_deref())?;

    // The profile is the only environment signal, read exactly once here.
    let profile_id = args
        .profile
        .or_else(|| std::env::var("VEXT_PROFILE").ok())
        .ok_or_else(|| {
            CliError::InvalidArgument(
                "no profile selected: pass --profile or set VEXT_PROFILE".to_string(),
            )
        })?;
    let profile: Profile = profile_id.parse()?;
    let env = EnvironmentContext::new(profile, project.version.clone());
    ui::info(&format!(
        "Profile: {} (package version {})",
        profile, env.package_version
    ));

    let targets = project.resolve_targets(&args.target)?;

    let display_name = if project.config.manifest.stamp_name {
        let provider = LocaleNameProvider::load(&project.layout.locale_store())?;
        Some(provider.display_name(profile))
    } else {
        None
    };

    let base = base_config(&env, &project.layout, &project.config.manifest);
    let bundler = CopyBundler;
    let pipeline = BuildPipeline::new(&env, &bundler).with_display_name(display_name);

    for target in &targets {
        ui::info(&format!("Building target: {}", target.name));
        let config = merge_target(&base, target);
        pipeline.run(&config)?;
        ui::success(&format!(
            "{} → {}",
            target.name,
            config.output.path.display()
        ));
    }

    ui::success(&format!(
        "Built {} target(s) in {}",
        targets.len(),
        ui::format_duration(start_time.elapsed())
    ));

    Ok(())
}
