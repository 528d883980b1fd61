//! Build command implementation.
//!
//! Writes every deployment artifact for the configured function into one
//! output directory.

use std::path::PathBuf;

use nextfire_config::{ConfigOverrides, DeployConfig};
use nextfire_target::FirebaseTarget;

use crate::cli::BuildArgs;
use crate::commands::utils::{self, Context};
use crate::error::Result;
use crate::ui;

/// Directory under the project root that holds generated deployments.
pub const OUTPUT_ROOT: &str = ".firebase";

/// Execute the build command.
///
/// # Steps
///
/// 1. Load configuration with CLI overrides applied
/// 2. Translate the routes manifest and generate the function artifacts
/// 3. Write them to `--out-dir` (default `.firebase/<function name>`)
/// 4. Print a summary of the written files
pub async fn execute(args: BuildArgs, context: &Context) -> Result<()> {
    let client = match args.client_options {
        Some(ref path) => Some(utils::read_client_options(&context.resolve_arg(path)).await?),
        None => None,
    };

    let config = context.load_config(&ConfigOverrides {
        function: args.function.overrides(),
        client,
        ..args.project.overrides()
    })?;

    let out_dir = match args.out_dir {
        Some(ref dir) => context.resolve_arg(dir),
        None => default_output_dir(&config),
    };

    let target = FirebaseTarget::new(&config);
    ui::info(&format!(
        "Preparing {} function '{}' for {}",
        config.function.generation.platform(),
        config.function.name,
        target.name()
    ));

    let summary = target.generate_output(&out_dir).await?;

    ui::print_output_summary(&summary);
    if summary.bridges_sessions {
        ui::info("Session bridging enabled: server.js verifies Firebase Auth cookies");
    }
    ui::success(&format!("Deployment ready in {}", summary.output_dir.display()));
    Ok(())
}

/// `.firebase/<function name>` inside the project root.
pub fn default_output_dir(config: &DeployConfig) -> PathBuf {
    config.project_path([OUTPUT_ROOT, config.function.name.as_str()])
}
