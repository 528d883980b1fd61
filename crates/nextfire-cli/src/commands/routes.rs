//! Routes command implementation.

use nextfire_config::ConfigOverrides;
use nextfire_target::translate_routes;

use crate::cli::RoutesArgs;
use crate::commands::utils::{self, Context};
use crate::error::Result;

/// Execute the routes command: print the translated hosting rules as JSON.
pub async fn execute(args: RoutesArgs, context: &Context) -> Result<()> {
    let config = context.load_config(&ConfigOverrides {
        dist_dir: args.dist_dir,
        ..ConfigOverrides::default()
    })?;

    let hosting = translate_routes(&config, &config.dist_dir)?;
    tracing::info!(
        "{} header rules, {} redirects, {} rewrites",
        hosting.headers.len(),
        hosting.redirects.len(),
        hosting.rewrites.len()
    );

    utils::print_json(&hosting)
}
