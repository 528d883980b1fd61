//! Firebase deployment target: runs every translation and writes the results.

use std::path::{Path, PathBuf};

use nextfire_config::DeployConfig;
use serde_json::{Value, json};

use crate::descriptor::build_function_descriptor;
use crate::entrypoint::build_server_entrypoint;
use crate::error::{Error, Result};
use crate::hosting::HostingConfig;
use crate::package::{SERVER_ENTRYPOINT, patch_package_manifest};
use crate::routes::translate_routes;

/// Hosting config written next to the function sources.
pub const FIREBASE_JSON: &str = "firebase.json";

/// Function descriptor file name.
pub const FUNCTIONS_YAML: &str = "functions.yaml";

/// Firebase Hosting + Cloud Functions deployment target
///
/// This target prepares a Next.js build for Firebase:
/// - Translates `routes-manifest.json` into hosting rules
/// - Generates `server.js` and its `functions.yaml` descriptor
/// - Patches the project's `package.json` to start the generated server
#[derive(Debug, Clone, Copy)]
pub struct FirebaseTarget<'a> {
    config: &'a DeployConfig,
}

/// What [`FirebaseTarget::generate_output`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSummary {
    pub output_dir: PathBuf,
    pub files: Vec<PathBuf>,
    pub hosting: HostingConfig,
    pub bridges_sessions: bool,
}

impl<'a> FirebaseTarget<'a> {
    pub fn new(config: &'a DeployConfig) -> Self {
        Self { config }
    }

    pub fn name(&self) -> &'static str {
        "firebase"
    }

    pub fn config(&self) -> &DeployConfig {
        self.config
    }

    /// Translate the build's routes manifest.
    pub fn hosting_config(&self) -> Result<HostingConfig> {
        translate_routes(self.config, &self.config.dist_dir)
    }

    /// Read the project's `package.json`, or an empty object if there is none.
    pub async fn read_package_manifest(&self) -> Result<Value> {
        let path = self.config.project_path(["package.json"]);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    "No package.json in {}, generating a minimal one",
                    self.config.project_root.display()
                );
                Ok(json!({}))
            }
            Err(err) => Err(Error::Io(err)),
        }
    }

    /// Write `firebase.json`, `functions.yaml`, `server.js`, and
    /// `package.json` into `output_dir`, creating it if needed.
    pub async fn generate_output(&self, output_dir: &Path) -> Result<OutputSummary> {
        let hosting = self.hosting_config()?;
        let function = &self.config.function;

        let section = hosting
            .clone()
            .into_hosting_section(function, &self.config.public_dir);
        let mut firebase_json = serde_json::to_string_pretty(&json!({ "hosting": section }))?;
        firebase_json.push('\n');

        let descriptor = build_function_descriptor(function)?;
        let server = build_server_entrypoint(function, self.config.client.as_ref());
        let package = patch_package_manifest(&self.read_package_manifest().await?, self.config)?;

        tokio::fs::create_dir_all(output_dir)
            .await
            .map_err(|source| Error::WriteFailed {
                path: output_dir.to_path_buf(),
                source,
            })?;

        let artifacts = [
            (FIREBASE_JSON, firebase_json),
            (FUNCTIONS_YAML, descriptor),
            (SERVER_ENTRYPOINT, server),
            ("package.json", package),
        ];

        let mut files = Vec::with_capacity(artifacts.len());
        for (name, contents) in artifacts {
            let path = output_dir.join(name);
            tokio::fs::write(&path, contents)
                .await
                .map_err(|source| Error::WriteFailed {
                    path: path.clone(),
                    source,
                })?;
            tracing::debug!("Wrote {}", path.display());
            files.push(path);
        }

        Ok(OutputSummary {
            output_dir: output_dir.to_path_buf(),
            files,
            hosting,
            bridges_sessions: self.config.bridges_sessions(),
        })
    }
}
