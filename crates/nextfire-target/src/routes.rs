//! Route translation: `routes-manifest.json` → [`HostingConfig`].

use std::path::Path;

use nextfire_config::DeployConfig;

use crate::error::Result;
use crate::hosting::HostingConfig;
use crate::manifest::{ROUTES_MANIFEST, RouteManifest};

/// Read `<project>/<dist_dir>/routes-manifest.json` and translate it.
///
/// Performs one blocking read; there is no retry or timeout.
///
/// # Errors
///
/// `Error::ManifestNotFound` when the build has not produced a manifest and
/// `Error::MalformedManifest` when its content does not parse.
pub fn translate_routes(config: &DeployConfig, dist_dir: impl AsRef<Path>) -> Result<HostingConfig> {
    let path = config.project_path([dist_dir.as_ref(), Path::new(ROUTES_MANIFEST)]);
    tracing::debug!("Reading routes manifest from {}", path.display());

    let manifest = RouteManifest::read(&path)?;

    let skipped = manifest.rewrites.skipped_len();
    if skipped > 0 {
        tracing::debug!(
            "Ignoring {} afterFiles/fallback rewrite(s); only beforeFiles rewrites are translated",
            skipped
        );
    }

    let hosting = HostingConfig::from_manifest(&manifest);
    tracing::debug!(
        "Translated {} header(s), {} redirect(s), {} rewrite(s)",
        hosting.headers.len(),
        hosting.redirects.len(),
        hosting.rewrites.len()
    );

    Ok(hosting)
}
