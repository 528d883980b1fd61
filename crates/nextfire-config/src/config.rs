//! High-level deployment configuration.
//!
//! This module provides the main `DeployConfig` struct and its layered
//! loading. For file discovery, see the `discovery` module.

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::discovery::{ConfigDiscovery, ConfigSource};
use crate::error::{ConfigError, Result};
use crate::function::{FunctionTarget, Generation};
use crate::toolchain::{DEFAULT_NODE_MAJOR, NodeToolchain};

/// Prefix for environment variable overrides (`NEXTFIRE_FUNCTION__REGION`).
pub const ENV_PREFIX: &str = "NEXTFIRE_";

/// Firebase web configuration handed to the client SDK.
///
/// The contents are opaque to nextfire; only their presence matters, since it
/// decides whether the generated server bridges sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientOptions(Map<String, Value>);

impl ClientOptions {
    pub fn new(options: Map<String, Value>) -> Self {
        Self(options)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse from JSON text (e.g. a `firebase-config.json` file).
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| ConfigError::invalid_value("client", format!("Invalid JSON: {e}")))?;
        Self::try_from(value)
    }
}

impl TryFrom<Value> for ClientOptions {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ConfigError::invalid_value(
                "client",
                format!("client options must be a JSON object, got {other}"),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Directory containing the Next.js project. Relative values in config
    /// files are resolved against the directory the config was loaded for.
    #[serde(default = "default_project_root")]
    pub project_root: PathBuf,

    /// Next.js build output directory, relative to the project root.
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,

    /// Static directory served by Firebase Hosting.
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,

    #[serde(default)]
    pub function: FunctionTarget,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<ClientOptions>,

    /// Node major version for `engines.node`. Detected from the local
    /// toolchain when unset.
    #[serde(
        default,
        deserialize_with = "deserialize_node_version",
        skip_serializing_if = "Option::is_none"
    )]
    pub node_version: Option<String>,
}

/// Accepts both `node_version = "18"` and `node_version = 18`; environment
/// variables arrive as numbers.
fn deserialize_node_version<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(u64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    }))
}

fn default_project_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from(".next")
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            project_root: default_project_root(),
            dist_dir: default_dist_dir(),
            public_dir: default_public_dir(),
            function: FunctionTarget::default(),
            client: None,
            node_version: None,
        }
    }
}

/// Values supplied on the command line. Unset fields leave lower layers alone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dist_dir: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_dir: Option<PathBuf>,

    #[serde(skip_serializing_if = "FunctionOverrides::is_empty")]
    pub function: FunctionOverrides,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<ClientOptions>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FunctionOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation: Option<Generation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl FunctionOverrides {
    pub fn is_empty(&self) -> bool {
        self.generation.is_none() && self.name.is_none() && self.region.is_none()
    }
}

impl DeployConfig {
    /// Defaults rooted at `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: root.into(),
            ..Self::default()
        }
    }

    /// Load configuration from multiple sources.
    ///
    /// Priority: CLI overrides > environment variables > config file > defaults.
    /// When `config_path` is `None` the project root is searched for
    /// `nextfire.toml` or a `nextfire` field in `package.json`; finding
    /// neither is fine and yields defaults.
    pub fn load(root: &Path, config_path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self> {
        let source = match config_path {
            Some(path) => Some(ConfigDiscovery::source_for(path)?),
            None => ConfigDiscovery::new(root).source()?,
        };

        match &source {
            Some(found) => tracing::debug!("Loading config from {}", found.path().display()),
            None => tracing::debug!("No config file found in {}, using defaults", root.display()),
        }

        let figment = Self::figment(root, source.as_ref())
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(Serialized::defaults(overrides));

        Self::extract(root, &figment)
    }

    /// Load configuration from a single source, without environment overrides.
    pub fn from_source(root: &Path, source: &ConfigSource) -> Result<Self> {
        Self::extract(root, &Self::figment(root, Some(source)))
    }

    fn figment(root: &Path, source: Option<&ConfigSource>) -> Figment {
        let figment = Figment::new().merge(Serialized::defaults(Self::with_root(root)));

        match source {
            Some(ConfigSource::Toml(path)) => figment.merge(Toml::file(path)),
            Some(ConfigSource::PackageJson { value, .. }) => {
                figment.merge(Serialized::defaults(value))
            }
            None => figment,
        }
    }

    fn extract(root: &Path, figment: &Figment) -> Result<Self> {
        let mut config: Self = figment
            .extract()
            .map_err(|e| ConfigError::invalid_value("configuration", e))?;

        if config.project_root.is_relative() && config.project_root != root {
            config.project_root = root.join(&config.project_root);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.function.validate()?;

        if let Some(ref version) = self.node_version {
            if version.trim().is_empty() {
                return Err(ConfigError::invalid_value(
                    "node_version",
                    "node_version cannot be empty",
                ));
            }
        }

        Ok(())
    }

    /// Resolve a path inside the project: the project root joined with each
    /// of `parts` in order.
    pub fn project_path<I, P>(&self, parts: I) -> PathBuf
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        parts
            .into_iter()
            .fold(self.project_root.clone(), |path, part| path.join(part))
    }

    /// Whether the generated server should bridge Firebase Auth sessions.
    pub fn bridges_sessions(&self) -> bool {
        self.client.is_some()
    }

    /// Node major version for `engines.node`.
    ///
    /// Uses `node_version` when set, then the local toolchain, then
    /// [`DEFAULT_NODE_MAJOR`].
    pub fn node_major(&self) -> String {
        if let Some(ref version) = self.node_version {
            return version.clone();
        }

        match NodeToolchain::detect() {
            Some(toolchain) => toolchain.major,
            None => {
                tracing::warn!(
                    "Could not detect a local node toolchain, defaulting engines.node to {}",
                    DEFAULT_NODE_MAJOR
                );
                DEFAULT_NODE_MAJOR.to_string()
            }
        }
    }
}
