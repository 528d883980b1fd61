//! `package.json` patching for the deployed function.

use nextfire_config::DeployConfig;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// File the patched manifest's `main` points at.
pub const SERVER_ENTRYPOINT: &str = "server.js";

pub const FIREBASE_FRAMEWORKS_VERSION: &str = "^0.6.0";
pub const FIREBASE_FUNCTIONS_VERSION: &str = "^3.24.1";
pub const FIREBASE_ADMIN_VERSION: &str = "^11.0.1";
pub const FIREBASE_VERSION: &str = "^9.12.1";
pub const COOKIE_VERSION: &str = "^0.5.0";
pub const LRU_CACHE_VERSION: &str = "^7.14.0";

/// Dependencies every generated server requires.
pub const RUNTIME_DEPENDENCIES: &[(&str, &str)] = &[
    ("firebase-frameworks", FIREBASE_FRAMEWORKS_VERSION),
    ("firebase-functions", FIREBASE_FUNCTIONS_VERSION),
    ("firebase-admin", FIREBASE_ADMIN_VERSION),
];

/// Extra dependencies of the session-bridging server.
pub const SESSION_DEPENDENCIES: &[(&str, &str)] = &[
    ("firebase", FIREBASE_VERSION),
    ("cookie", COOKIE_VERSION),
    ("lru-cache", LRU_CACHE_VERSION),
];

/// Point `manifest` at the generated server and fill in missing dependencies.
///
/// The input is shallow-copied: `main` is always overwritten, while
/// dependency versions and `engines.node` are only set when absent (a `null`
/// counts as absent). Caller-pinned versions are never touched, so patching
/// an already patched manifest is a no-op. Key order of the input is kept.
///
/// Output is 2-space indented JSON with a trailing newline.
///
/// # Errors
///
/// `Error::InvalidPackageManifest` when the manifest, its `dependencies`, or
/// its `engines` is not a JSON object.
pub fn patch_package_manifest(manifest: &Value, config: &DeployConfig) -> Result<String> {
    let Value::Object(original) = manifest else {
        return Err(Error::invalid_package("expected a JSON object at the top level"));
    };

    let mut patched = original.clone();
    patched.insert("main".to_string(), Value::String(SERVER_ENTRYPOINT.to_string()));

    let dependencies = object_field(&mut patched, "dependencies")?;
    let session_dependencies: &[(&str, &str)] = if config.bridges_sessions() {
        SESSION_DEPENDENCIES
    } else {
        &[]
    };
    for (name, version) in RUNTIME_DEPENDENCIES.iter().chain(session_dependencies) {
        set_if_absent(dependencies, name, || version.to_string());
    }

    let engines = object_field(&mut patched, "engines")?;
    set_if_absent(engines, "node", || config.node_major());

    let mut json = serde_json::to_string_pretty(&Value::Object(patched))?;
    json.push('\n');
    Ok(json)
}

/// Get `map[key]` as an object, inserting an empty one when absent or null.
fn object_field<'a>(map: &'a mut Map<String, Value>, key: &str) -> Result<&'a mut Map<String, Value>> {
    let slot = map
        .entry(key)
        .or_insert_with(|| Value::Object(Map::new()));
    if slot.is_null() {
        *slot = Value::Object(Map::new());
    }

    slot.as_object_mut()
        .ok_or_else(|| Error::invalid_package(format!("`{key}` must be an object")))
}

fn set_if_absent(map: &mut Map<String, Value>, key: &str, value: impl FnOnce() -> String) {
    match map.get_mut(key) {
        Some(existing) if !existing.is_null() => {
            tracing::debug!("Keeping pinned {} = {}", key, existing);
        }
        Some(existing) => *existing = Value::String(value()),
        None => {
            map.insert(key.to_string(), Value::String(value()));
        }
    }
}
