//! Entrypoint command implementation.

use nextfire_config::ConfigOverrides;
use nextfire_target::build_server_entrypoint;

use crate::cli::EntrypointArgs;
use crate::commands::utils::{self, Context};
use crate::error::Result;

/// Execute the entrypoint command: print the generated `server.js`.
///
/// `--client-options` takes precedence over client options from the config
/// file; either one turns on session bridging.
pub async fn execute(args: EntrypointArgs, context: &Context) -> Result<()> {
    let client = match args.client_options {
        Some(ref path) => Some(utils::read_client_options(&context.resolve_arg(path)).await?),
        None => None,
    };

    let config = context.load_config(&ConfigOverrides {
        function: args.function.overrides(),
        client,
        ..ConfigOverrides::default()
    })?;

    if config.bridges_sessions() {
        tracing::debug!("Client options present, generating session bridge");
    }

    let script = build_server_entrypoint(&config.function, config.client.as_ref());
    utils::print_artifact(&script)
}
