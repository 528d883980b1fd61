//! nextfire CLI - deploy Next.js builds to Firebase.
//!
//! This is the main entry point for the nextfire CLI. It handles command-line
//! argument parsing, logging initialization, and command dispatch.

use clap::Parser;
use miette::Result;
use nextfire_cli::{cli, commands, error, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging and colors based on global flags
    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    // Convert CLI errors to miette diagnostics for error reporting
    run(args).await.map_err(error::cli_error_to_miette)
}

async fn run(args: cli::Cli) -> error::Result<()> {
    let context = commands::Context::resolve(args.cwd, args.config)?;

    match args.command {
        cli::Command::Routes(routes_args) => commands::routes_execute(routes_args, &context).await,
        cli::Command::Descriptor(descriptor_args) => {
            commands::descriptor_execute(descriptor_args, &context).await
        }
        cli::Command::Entrypoint(entrypoint_args) => {
            commands::entrypoint_execute(entrypoint_args, &context).await
        }
        cli::Command::Package(package_args) => commands::package_execute(package_args, &context).await,
        cli::Command::Build(build_args) => commands::build_execute(build_args, &context).await,
        cli::Command::Check(check_args) => commands::check_execute(check_args, &context).await,
    }
}
