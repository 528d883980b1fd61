//! Package command implementation.

use nextfire_config::ConfigOverrides;
use nextfire_target::{FirebaseTarget, patch_package_manifest};

use crate::cli::PackageArgs;
use crate::commands::utils::{self, Context};
use crate::error::{Result, ResultExt};
use crate::ui;

/// Execute the package command.
///
/// Prints the patched `package.json`, or with `--write` replaces the
/// project's own file with it.
pub async fn execute(args: PackageArgs, context: &Context) -> Result<()> {
    let config = context.load_config(&ConfigOverrides {
        node_version: args.node_version,
        ..ConfigOverrides::default()
    })?;

    let target = FirebaseTarget::new(&config);
    let manifest = target.read_package_manifest().await?;
    let patched = patch_package_manifest(&manifest, &config)?;

    if !args.write {
        return utils::print_artifact(&patched);
    }

    let path = config.project_path(["package.json"]);
    tokio::fs::write(&path, patched).await.with_path(&path)?;
    ui::success(&format!("Patched {}", path.display()));
    Ok(())
}
