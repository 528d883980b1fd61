//! Firebase Hosting rules produced from a routes manifest.

use std::path::Path;

use nextfire_config::FunctionTarget;
use serde::{Deserialize, Serialize};

use crate::manifest::{Header, RouteManifest};

/// Header, redirect, and rewrite rules in Firebase Hosting's format.
///
/// Sequences keep the manifest order: hosting applies rules first-match-wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostingConfig {
    pub headers: Vec<HostingHeader>,
    pub redirects: Vec<HostingRedirect>,
    pub rewrites: Vec<HostingRewrite>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostingHeader {
    pub source: String,
    pub headers: Vec<Header>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostingRedirect {
    pub source: String,
    pub destination: String,
    /// HTTP status code of the redirect.
    #[serde(rename = "type")]
    pub kind: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostingRewrite {
    pub source: String,
    pub destination: String,
}

impl HostingConfig {
    /// Project a manifest onto hosting rules.
    ///
    /// - headers lose their precomputed `regex`
    /// - `internal` redirects are dropped; the rest keep their status code as `type`
    /// - only `beforeFiles` rewrites are used, and conditional ones are dropped
    pub fn from_manifest(manifest: &RouteManifest) -> Self {
        let headers = manifest
            .headers
            .iter()
            .map(|rule| HostingHeader {
                source: rule.source.clone(),
                headers: rule.headers.clone(),
            })
            .collect();

        let redirects = manifest
            .redirects
            .iter()
            .filter(|rule| !rule.internal)
            .map(|rule| HostingRedirect {
                source: rule.source.clone(),
                destination: rule.destination.clone(),
                kind: rule.status_code,
            })
            .collect();

        let rewrites = manifest
            .rewrites
            .before_files()
            .iter()
            .filter(|rule| !rule.is_conditional())
            .map(|rule| HostingRewrite {
                source: rule.source.clone(),
                destination: rule.destination.clone(),
            })
            .collect();

        Self {
            headers,
            redirects,
            rewrites,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.redirects.is_empty() && self.rewrites.is_empty()
    }

    /// Build the `hosting` object of `firebase.json`.
    ///
    /// The translated rewrites are followed by a catch-all that sends every
    /// unmatched request to the SSR function.
    pub fn into_hosting_section(self, function: &FunctionTarget, public_dir: &Path) -> HostingSection {
        let mut rewrites: Vec<SectionRewrite> = self
            .rewrites
            .into_iter()
            .map(SectionRewrite::Destination)
            .collect();

        rewrites.push(SectionRewrite::Function {
            source: "**".to_string(),
            function: FunctionRewrite {
                function_id: function.name.clone(),
                region: function.region.clone(),
            },
        });

        HostingSection {
            public: public_dir.to_string_lossy().replace('\\', "/"),
            headers: self.headers,
            redirects: self.redirects,
            rewrites,
        }
    }
}

/// The `hosting` object of `firebase.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostingSection {
    pub public: String,
    pub headers: Vec<HostingHeader>,
    pub redirects: Vec<HostingRedirect>,
    pub rewrites: Vec<SectionRewrite>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SectionRewrite {
    Destination(HostingRewrite),
    Function {
        source: String,
        function: FunctionRewrite,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionRewrite {
    pub function_id: String,
    pub region: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn redirect_serializes_status_as_type() {
        let redirect = HostingRedirect {
            source: "/a".to_string(),
            destination: "/b".to_string(),
            kind: 308,
        };
        assert_eq!(
            serde_json::to_value(&redirect).unwrap(),
            json!({ "source": "/a", "destination": "/b", "type": 308 })
        );
    }

    #[test]
    fn hosting_section_appends_function_catch_all() {
        let config = HostingConfig {
            rewrites: vec![HostingRewrite {
                source: "/old".to_string(),
                destination: "/new".to_string(),
            }],
            ..HostingConfig::default()
        };

        let section = config.into_hosting_section(&FunctionTarget::default(), Path::new("public"));
        assert_eq!(
            serde_json::to_value(&section).unwrap(),
            json!({
                "public": "public",
                "headers": [],
                "redirects": [],
                "rewrites": [
                    { "source": "/old", "destination": "/new" },
                    { "source": "**", "function": { "functionId": "ssr", "region": "us-central1" } }
                ]
            })
        );
    }
}
