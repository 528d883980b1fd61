//! Shared utilities for command implementations.
//!
//! - Resolving the project root and config path from global flags
//! - Loading configuration with CLI overrides
//! - Reading client options files
//! - Printing generated artifacts to stdout

use crate::error::{CliError, Result, ResultExt};
use nextfire_config::{ClientOptions, ConfigOverrides, DeployConfig};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where a command runs: the project root and an explicit config file, if any.
#[derive(Debug, Clone)]
pub struct Context {
    /// Directory the CLI was invoked from.
    pub cwd: PathBuf,
    pub root: PathBuf,
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Resolve `--cwd` and `--config` against the current directory.
    ///
    /// # Errors
    ///
    /// `CliError::InvalidArgument` when the project root is not a directory.
    pub fn resolve(cwd: Option<PathBuf>, config: Option<PathBuf>) -> Result<Self> {
        let current = get_cwd()?;
        let root = match cwd {
            Some(dir) => resolve_path(&dir, &current),
            None => current.clone(),
        };

        if !root.is_dir() {
            return Err(CliError::InvalidArgument(format!(
                "Project directory does not exist: {}",
                root.display()
            )));
        }

        Ok(Self {
            config_path: config.map(|path| resolve_path(&path, &current)),
            cwd: current,
            root,
        })
    }

    /// Resolve a path given on the command line.
    pub fn resolve_arg(&self, path: &Path) -> PathBuf {
        resolve_path(path, &self.cwd)
    }

    /// Load the layered configuration for this project.
    pub fn load_config(&self, overrides: &ConfigOverrides) -> Result<DeployConfig> {
        let config = DeployConfig::load(&self.root, self.config_path.as_deref(), overrides)?;
        tracing::debug!(
            "Function {} (gen {}) in {}",
            config.function.name,
            config.function.generation,
            config.function.region
        );
        Ok(config)
    }
}

/// Resolve a path relative to a working directory.
///
/// If the path is absolute, returns it unchanged. Otherwise, joins it with
/// the working directory.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Get the current working directory.
pub fn get_cwd() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| {
        CliError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to get current directory: {}", e),
        ))
    })
}

/// Read a Firebase web config from a JSON file.
pub async fn read_client_options(path: &Path) -> Result<ClientOptions> {
    let text = tokio::fs::read_to_string(path).await.with_path(path)?;
    Ok(ClientOptions::from_json(&text)?)
}

/// Write generated text to stdout as-is.
pub fn print_artifact(contents: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(contents.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Write a value to stdout as 2-space indented JSON with a trailing newline.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    print_artifact(&json)
}
