//! File-based config discovery for CLI use
//!
//! Handles finding and reading nextfire configuration files from the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::DeployConfig;
use crate::error::{ConfigError, Result};

/// Name of the standalone config file.
pub const CONFIG_FILE: &str = "nextfire.toml";

/// Field of `package.json` that may hold the config instead.
pub const PACKAGE_JSON_FIELD: &str = "nextfire";

/// A configuration file that was found and read.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    /// A `nextfire.toml` file; figment reads it directly.
    Toml(PathBuf),
    /// The `nextfire` field extracted from a `package.json`.
    PackageJson { path: PathBuf, value: Value },
}

impl ConfigSource {
    pub fn path(&self) -> &Path {
        match self {
            ConfigSource::Toml(path) => path,
            ConfigSource::PackageJson { path, .. } => path,
        }
    }
}

/// File-based configuration discovery
///
/// Searches the project root for a nextfire configuration.
///
/// # Example
///
/// ```no_run
/// use nextfire_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. `nextfire.toml`
    /// 2. `package.json` with a `nextfire` field
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(CONFIG_FILE);
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        let content = fs::read_to_string(&pkg_path).ok()?;
        let parsed: Value = serde_json::from_str(&content).ok()?;
        match parsed.get(PACKAGE_JSON_FIELD) {
            Some(field) if !field.is_null() => Some(pkg_path),
            _ => None,
        }
    }

    /// Resolve the discovered config file into a [`ConfigSource`].
    pub fn source(&self) -> Result<Option<ConfigSource>> {
        self.find().map(|path| Self::source_for(&path)).transpose()
    }

    /// Read a specific config file into a [`ConfigSource`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::FileNotFound` when the file does not exist and
    /// `ConfigError::UnsupportedFormat` for anything that is neither TOML nor
    /// `package.json`.
    pub fn source_for(path: &Path) -> Result<ConfigSource> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
            return Self::package_json_source(path);
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(ConfigSource::Toml(path.to_path_buf())),
            Some(other) => Err(ConfigError::UnsupportedFormat(other.to_string())),
            None => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Load config from the discovered file, without environment overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<DeployConfig> {
        let source = self.source()?.ok_or(ConfigError::NotFound)?;
        DeployConfig::from_source(&self.root, &source)
    }

    fn package_json_source(path: &Path) -> Result<ConfigSource> {
        let content = fs::read_to_string(path)?;

        let mut parsed: Value = serde_json::from_str(&content)
            .map_err(|e| ConfigError::invalid_value("package.json", format!("Invalid JSON: {e}")))?;

        let value = parsed
            .get_mut(PACKAGE_JSON_FIELD)
            .map(Value::take)
            .filter(|value| !value.is_null())
            .ok_or_else(|| {
                ConfigError::invalid_value(
                    PACKAGE_JSON_FIELD,
                    "Add a 'nextfire' field to your package.json",
                )
            })?;

        if !value.is_object() {
            return Err(ConfigError::invalid_value(
                PACKAGE_JSON_FIELD,
                "The 'nextfire' field must be an object",
            ));
        }

        Ok(ConfigSource::PackageJson {
            path: path.to_path_buf(),
            value,
        })
    }
}
