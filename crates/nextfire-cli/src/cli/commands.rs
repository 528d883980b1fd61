use clap::{Args, Subcommand};
use nextfire_config::{ConfigOverrides, FunctionOverrides, Generation};
use std::path::PathBuf;

use crate::cli::validation::{parse_function_name, parse_generation, parse_region};

/// Available nextfire subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print Firebase Hosting rules translated from the routes manifest
    ///
    /// Reads <dist-dir>/routes-manifest.json and prints the headers,
    /// redirects, and rewrites Firebase Hosting should apply.
    Routes(RoutesArgs),

    /// Print the Cloud Function deployment descriptor
    Descriptor(DescriptorArgs),

    /// Print the generated server.js
    ///
    /// With client options configured, the server also bridges Firebase
    /// Auth sessions into server-rendered requests.
    Entrypoint(EntrypointArgs),

    /// Print the patched package.json, or write it back with --write
    Package(PackageArgs),

    /// Write firebase.json, functions.yaml, server.js, and package.json
    ///
    /// Runs every translation and writes the results into one directory,
    /// ready to deploy.
    Build(BuildArgs),

    /// Validate configuration and the Next.js build output
    Check(CheckArgs),
}

/// Options shared by commands that touch the Next.js project layout
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Next.js build output directory, relative to the project root
    #[arg(long, value_name = "DIR")]
    pub dist_dir: Option<PathBuf>,

    /// Static assets directory served by Firebase Hosting
    #[arg(long, value_name = "DIR")]
    pub public_dir: Option<PathBuf>,

    /// Node major version for engines.node (e.g. 18)
    #[arg(long, value_name = "VERSION")]
    pub node_version: Option<String>,
}

/// Options selecting the Cloud Function that serves the app
#[derive(Args, Debug, Clone, Default)]
pub struct FunctionArgs {
    /// Function name, exported from server.js
    #[arg(long, value_name = "NAME", value_parser = parse_function_name)]
    pub name: Option<String>,

    /// Deployment region
    #[arg(long, value_name = "REGION", value_parser = parse_region)]
    pub region: Option<String>,

    /// Cloud Functions generation (1 or 2)
    #[arg(long, value_name = "GEN", value_parser = parse_generation)]
    pub generation: Option<Generation>,
}

impl FunctionArgs {
    pub fn overrides(&self) -> FunctionOverrides {
        FunctionOverrides {
            generation: self.generation,
            name: self.name.clone(),
            region: self.region.clone(),
        }
    }
}

impl ProjectArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            dist_dir: self.dist_dir.clone(),
            public_dir: self.public_dir.clone(),
            node_version: self.node_version.clone(),
            ..ConfigOverrides::default()
        }
    }
}

/// Arguments for the routes command
#[derive(Args, Debug)]
pub struct RoutesArgs {
    /// Next.js build output directory, relative to the project root
    #[arg(long, value_name = "DIR")]
    pub dist_dir: Option<PathBuf>,
}

/// Arguments for the descriptor command
#[derive(Args, Debug)]
pub struct DescriptorArgs {
    #[command(flatten)]
    pub function: FunctionArgs,
}

/// Arguments for the entrypoint command
#[derive(Args, Debug)]
pub struct EntrypointArgs {
    #[command(flatten)]
    pub function: FunctionArgs,

    /// JSON file with the Firebase web config, enabling session bridging
    #[arg(long, value_name = "FILE")]
    pub client_options: Option<PathBuf>,
}

/// Arguments for the package command
#[derive(Args, Debug)]
pub struct PackageArgs {
    /// Write the patched manifest back to the project's package.json
    #[arg(short, long)]
    pub write: bool,

    /// Node major version for engines.node (e.g. 18)
    #[arg(long, value_name = "VERSION")]
    pub node_version: Option<String>,
}

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Output directory for generated artifacts
    ///
    /// Defaults to .firebase/<function name> inside the project root.
    #[arg(short = 'd', long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    #[command(flatten)]
    pub project: ProjectArgs,

    #[command(flatten)]
    pub function: FunctionArgs,

    /// JSON file with the Firebase web config, enabling session bridging
    #[arg(long, value_name = "FILE")]
    pub client_options: Option<PathBuf>,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Next.js build output directory, relative to the project root
    #[arg(long, value_name = "DIR")]
    pub dist_dir: Option<PathBuf>,
}
