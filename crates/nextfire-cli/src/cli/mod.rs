//! Command-line interface definition for nextfire.
//!
//! # Command Structure
//!
//! - `nextfire routes` - Print Firebase Hosting rules for the Next.js build
//! - `nextfire descriptor` - Print the Cloud Function descriptor
//! - `nextfire entrypoint` - Print the generated `server.js`
//! - `nextfire package` - Print or write the patched `package.json`
//! - `nextfire build` - Write every deployment artifact to a directory
//! - `nextfire check` - Validate configuration and the build output

mod commands;
mod tests;
mod validation;

use clap::Parser;
use std::path::PathBuf;

pub use commands::{
    BuildArgs, CheckArgs, Command, DescriptorArgs, EntrypointArgs, FunctionArgs, PackageArgs,
    ProjectArgs, RoutesArgs,
};
pub use validation::{parse_function_name, parse_generation, parse_region};

/// nextfire - deploy Next.js builds to Firebase
#[derive(Parser, Debug)]
#[command(
    name = "nextfire",
    version,
    about = "Deploy Next.js builds to Firebase Hosting and Cloud Functions",
    long_about = "nextfire translates a Next.js build into Firebase deployment artifacts:\n\
                  hosting rules from routes-manifest.json, a Cloud Function descriptor,\n\
                  a server entry point, and a package.json that runs it."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Project root containing the Next.js app
    ///
    /// Defaults to the current directory.
    #[arg(long, global = true, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Path to nextfire.toml or a package.json with a "nextfire" field
    ///
    /// If not provided, the project root is searched for nextfire.toml and
    /// then package.json.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
