//! Next.js `routes-manifest.json` model.
//!
//! Only the fields the translator reads are modelled; anything else in the
//! manifest (dynamic routes, i18n, data routes) is ignored on deserialize.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// File name of the manifest inside the build output directory.
pub const ROUTES_MANIFEST: &str = "routes-manifest.json";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteManifest {
    #[serde(default)]
    pub version: Option<u32>,

    #[serde(default)]
    pub dist_dir: Option<String>,

    #[serde(default)]
    pub base_path: Option<String>,

    #[serde(default)]
    pub headers: Vec<HeaderRule>,

    #[serde(default)]
    pub redirects: Vec<RedirectRule>,

    #[serde(default)]
    pub rewrites: Rewrites,
}

/// A single response header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HeaderRule {
    pub source: String,

    #[serde(default)]
    pub regex: Option<String>,

    pub headers: Vec<Header>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectRule {
    pub source: String,

    pub destination: String,

    #[serde(default)]
    pub regex: Option<String>,

    pub status_code: u16,

    /// Set on redirects Next.js generates for its own routing (trailing
    /// slashes, base path); these never reach the public host.
    #[serde(default)]
    pub internal: bool,
}

/// A `has`/`missing` match condition on a rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouteCondition {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub key: Option<String>,

    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Rewrite {
    pub source: String,

    pub destination: String,

    #[serde(default)]
    pub regex: Option<String>,

    #[serde(default)]
    pub locale: Option<bool>,

    #[serde(default)]
    pub has: Option<Vec<RouteCondition>>,

    #[serde(default)]
    pub missing: Option<Vec<RouteCondition>>,
}

impl Rewrite {
    /// Whether the rewrite only applies when request conditions match.
    ///
    /// A present-but-empty condition list still counts.
    pub fn is_conditional(&self) -> bool {
        self.has.is_some() || self.missing.is_some()
    }
}

/// Rewrites come either as one flat list or grouped by phase.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Rewrites {
    Flat(Vec<Rewrite>),
    Phased(PhasedRewrites),
}

impl Default for Rewrites {
    fn default() -> Self {
        Rewrites::Flat(Vec::new())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhasedRewrites {
    #[serde(default)]
    pub before_files: Vec<Rewrite>,

    #[serde(default)]
    pub after_files: Vec<Rewrite>,

    #[serde(default)]
    pub fallback: Vec<Rewrite>,
}

impl Rewrites {
    /// Rewrites that are applied before static files are served.
    ///
    /// For phased manifests this is `beforeFiles` only; `afterFiles` and
    /// `fallback` are not carried over to the hosting config.
    pub fn before_files(&self) -> &[Rewrite] {
        match self {
            Rewrites::Flat(rewrites) => rewrites,
            Rewrites::Phased(phased) => &phased.before_files,
        }
    }

    /// Number of rules in phases that [`Rewrites::before_files`] skips.
    pub fn skipped_len(&self) -> usize {
        match self {
            Rewrites::Flat(_) => 0,
            Rewrites::Phased(phased) => phased.after_files.len() + phased.fallback.len(),
        }
    }
}

impl RouteManifest {
    /// Parse a manifest from JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    /// Read and parse the manifest at `path`.
    ///
    /// # Errors
    ///
    /// `Error::ManifestNotFound` if the file does not exist,
    /// `Error::MalformedManifest` if it does not parse.
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => Error::ManifestNotFound {
                path: path.to_path_buf(),
            },
            _ => Error::Io(err),
        })?;

        Self::from_slice(&bytes).map_err(|source| Error::MalformedManifest {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flat_rewrites() {
        let manifest = RouteManifest::from_slice(
            br#"{
                "version": 3,
                "basePath": "",
                "rewrites": [
                    { "source": "/a", "destination": "/b", "regex": "^/a$" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(manifest.version, Some(3));
        assert_eq!(manifest.base_path.as_deref(), Some(""));
        assert!(matches!(manifest.rewrites, Rewrites::Flat(ref r) if r.len() == 1));
        assert_eq!(manifest.rewrites.skipped_len(), 0);
    }

    #[test]
    fn parses_phased_rewrites() {
        let manifest = RouteManifest::from_slice(
            br#"{
                "rewrites": {
                    "beforeFiles": [{ "source": "/a", "destination": "/b" }],
                    "afterFiles": [{ "source": "/c", "destination": "/d" }],
                    "fallback": [{ "source": "/e", "destination": "/f" }]
                }
            }"#,
        )
        .unwrap();

        let before = manifest.rewrites.before_files();
        assert_eq!(before.len(), 1);
        assert_eq!(before[0].source, "/a");
        assert_eq!(manifest.rewrites.skipped_len(), 2);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let manifest = RouteManifest::from_slice(b"{}").unwrap();
        assert!(manifest.headers.is_empty());
        assert!(manifest.redirects.is_empty());
        assert!(manifest.rewrites.before_files().is_empty());
    }

    #[test]
    fn empty_condition_list_is_still_conditional() {
        let rewrite: Rewrite =
            serde_json::from_str(r#"{ "source": "/a", "destination": "/b", "has": [] }"#).unwrap();
        assert!(rewrite.is_conditional());

        let rewrite: Rewrite = serde_json::from_str(
            r#"{ "source": "/a", "destination": "/b", "missing": [{ "type": "cookie", "key": "x" }] }"#,
        )
        .unwrap();
        assert!(rewrite.is_conditional());
    }

    #[test]
    fn redirect_requires_status_code() {
        let result = RouteManifest::from_slice(
            br#"{ "redirects": [{ "source": "/a", "destination": "/b" }] }"#,
        );
        assert!(result.is_err());
    }
}
