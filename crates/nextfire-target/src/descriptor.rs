//! Cloud Functions deployment descriptor (`functions.yaml`).
//!
//! The descriptor is emitted as JSON, which the deploy tooling reads as YAML.

use indexmap::IndexMap;
use nextfire_config::FunctionTarget;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// Schema version tag of the descriptor.
pub const SPEC_VERSION: &str = "v1alpha1";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FunctionsManifest<'a> {
    spec_version: &'static str,
    #[serde(rename = "requiredAPIs")]
    required_apis: Vec<Value>,
    endpoints: IndexMap<&'a str, Endpoint<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Endpoint<'a> {
    platform: &'static str,
    region: [&'a str; 1],
    labels: IndexMap<String, String>,
    https_trigger: HttpsTrigger,
    entry_point: &'a str,
}

/// Marker for an HTTP-triggered function; serializes as `{}`.
#[derive(Debug, Serialize)]
struct HttpsTrigger {}

/// Build the descriptor for a single HTTP function.
///
/// Output is 2-space indented JSON with a trailing newline.
///
/// # Example
///
/// ```
/// use nextfire_config::{FunctionTarget, Generation};
/// use nextfire_target::build_function_descriptor;
///
/// let target = FunctionTarget::new(Generation::V2, "ssr", "us-central1");
/// let json = build_function_descriptor(&target).unwrap();
/// assert!(json.contains(r#""platform": "gcfv2""#));
/// ```
pub fn build_function_descriptor(target: &FunctionTarget) -> Result<String> {
    let mut endpoints = IndexMap::with_capacity(1);
    endpoints.insert(
        target.name.as_str(),
        Endpoint {
            platform: target.generation.platform(),
            region: [target.region.as_str()],
            labels: IndexMap::new(),
            https_trigger: HttpsTrigger {},
            entry_point: target.name.as_str(),
        },
    );

    let manifest = FunctionsManifest {
        spec_version: SPEC_VERSION,
        required_apis: Vec::new(),
        endpoints,
    };

    let mut json = serde_json::to_string_pretty(&manifest)?;
    json.push('\n');
    Ok(json)
}
