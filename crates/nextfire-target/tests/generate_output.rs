//! Integration tests for writing every artifact to an output directory.

use nextfire_config::{ClientOptions, DeployConfig, Generation};
use nextfire_target::{Error, FirebaseTarget};
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;

fn project(manifest: &str, package_json: Option<&str>) -> TempDir {
    let temp = TempDir::new().unwrap();
    let dist = temp.path().join(".next");
    fs::create_dir_all(&dist).unwrap();
    fs::write(dist.join("routes-manifest.json"), manifest).unwrap();
    if let Some(package_json) = package_json {
        fs::write(temp.path().join("package.json"), package_json).unwrap();
    }
    temp
}

fn config(root: &std::path::Path) -> DeployConfig {
    DeployConfig {
        node_version: Some("18".to_string()),
        ..DeployConfig::with_root(root)
    }
}

#[tokio::test]
async fn writes_all_artifacts() {
    let temp = project(
        r#"{
            "redirects": [{ "source": "/old", "destination": "/new", "statusCode": 308 }],
            "rewrites": [{ "source": "/docs", "destination": "/documentation" }]
        }"#,
        Some(r#"{ "name": "web", "dependencies": { "next": "13.0.0" } }"#),
    );
    let config = config(temp.path());
    let out_dir = temp.path().join(".firebase").join("ssr");

    let summary = FirebaseTarget::new(&config)
        .generate_output(&out_dir)
        .await
        .unwrap();

    assert_eq!(summary.files.len(), 4);
    assert!(!summary.bridges_sessions);
    for file in &summary.files {
        assert!(file.exists(), "{} should exist", file.display());
    }

    let firebase: Value =
        serde_json::from_str(&fs::read_to_string(out_dir.join("firebase.json")).unwrap()).unwrap();
    assert_eq!(
        firebase["hosting"]["redirects"],
        json!([{ "source": "/old", "destination": "/new", "type": 308 }])
    );
    assert_eq!(
        firebase["hosting"]["rewrites"],
        json!([
            { "source": "/docs", "destination": "/documentation" },
            { "source": "**", "function": { "functionId": "ssr", "region": "us-central1" } }
        ])
    );

    let descriptor: Value =
        serde_json::from_str(&fs::read_to_string(out_dir.join("functions.yaml")).unwrap()).unwrap();
    assert_eq!(descriptor["endpoints"]["ssr"]["platform"], "gcfv2");

    let server = fs::read_to_string(out_dir.join("server.js")).unwrap();
    assert!(server.contains("exports.ssr = onRequest("));

    let package: Value =
        serde_json::from_str(&fs::read_to_string(out_dir.join("package.json")).unwrap()).unwrap();
    assert_eq!(package["main"], "server.js");
    assert_eq!(package["dependencies"]["next"], "13.0.0");
    assert_eq!(package["engines"]["node"], "18");
}

#[tokio::test]
async fn missing_package_json_yields_minimal_manifest() {
    let temp = project("{}", None);
    let mut config = config(temp.path());
    config.function.generation = Generation::V1;
    config.client = Some(ClientOptions::try_from(json!({ "projectId": "demo" })).unwrap());
    let out_dir = temp.path().join("out");

    let summary = FirebaseTarget::new(&config)
        .generate_output(&out_dir)
        .await
        .unwrap();
    assert!(summary.bridges_sessions);

    let package: Value =
        serde_json::from_str(&fs::read_to_string(out_dir.join("package.json")).unwrap()).unwrap();
    assert_eq!(package["main"], "server.js");
    assert_eq!(package["dependencies"]["lru-cache"], "^7.14.0");

    let server = fs::read_to_string(out_dir.join("server.js")).unwrap();
    assert!(server.contains("functions.region('us-central1')"));
    assert!(server.contains("/__next/cookie"));
}

#[tokio::test]
async fn missing_manifest_fails_before_writing() {
    let temp = TempDir::new().unwrap();
    let config = config(temp.path());
    let out_dir = temp.path().join("out");

    let err = FirebaseTarget::new(&config)
        .generate_output(&out_dir)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ManifestNotFound { .. }));
    assert!(!out_dir.exists());
}
