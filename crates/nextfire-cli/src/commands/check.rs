//! Check command implementation.
//!
//! Validates configuration and the build output without writing anything.

use std::path::Path;

use nextfire_config::{ConfigOverrides, DeployConfig};
use nextfire_target::{FirebaseTarget, ROUTES_MANIFEST};

use crate::cli::CheckArgs;
use crate::commands::utils::Context;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load and validate the layered configuration
/// 2. Check the routes manifest exists and parses
/// 3. Check for a project `package.json`
///
/// A missing manifest or `package.json` is reported as a warning; an invalid
/// configuration or a malformed manifest is an error.
pub async fn execute(args: CheckArgs, context: &Context) -> Result<()> {
    ui::info("Checking configuration...");

    let config = context.load_config(&ConfigOverrides {
        dist_dir: args.dist_dir,
        ..ConfigOverrides::default()
    })?;
    ui::success("Configuration is valid!");
    report_function(&config);

    ui::info("Checking build output...");
    let manifest_path = config.project_path([config.dist_dir.as_path(), Path::new(ROUTES_MANIFEST)]);
    if manifest_path.is_file() {
        let hosting = FirebaseTarget::new(&config).hosting_config()?;
        ui::success(&format!(
            "  {} ({} header rules, {} redirects, {} rewrites)",
            manifest_path.display(),
            hosting.headers.len(),
            hosting.redirects.len(),
            hosting.rewrites.len()
        ));
    } else {
        ui::warning(&format!(
            "Routes manifest not found: {} (run `next build` first)",
            manifest_path.display()
        ));
    }

    if !config.project_path(["package.json"]).is_file() {
        ui::warning("No package.json found, a minimal one will be generated");
    }

    ui::success("All checks passed!");
    Ok(())
}

fn report_function(config: &DeployConfig) {
    let function = &config.function;
    ui::info(&format!(
        "  function '{}' ({}) in {}",
        function.name,
        function.generation.platform(),
        function.region
    ));

    if config.bridges_sessions() {
        ui::info("  session bridging enabled");
    }
}
