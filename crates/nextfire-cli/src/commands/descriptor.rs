//! Descriptor command implementation.

use nextfire_config::ConfigOverrides;
use nextfire_target::build_function_descriptor;

use crate::cli::DescriptorArgs;
use crate::commands::utils::{self, Context};
use crate::error::Result;

/// Execute the descriptor command: print the function descriptor.
pub async fn execute(args: DescriptorArgs, context: &Context) -> Result<()> {
    let config = context.load_config(&ConfigOverrides {
        function: args.function.overrides(),
        ..ConfigOverrides::default()
    })?;

    let descriptor = build_function_descriptor(&config.function)?;
    utils::print_artifact(&descriptor)
}
