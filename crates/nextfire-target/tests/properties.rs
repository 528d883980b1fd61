//! Property-based tests for the translator using proptest.
//!
//! These verify the ordering, filtering, idempotence, and determinism laws
//! over randomly generated manifests and package.json files.

use nextfire_config::{ClientOptions, DeployConfig, FunctionTarget, Generation};
use nextfire_target::manifest::{RedirectRule, Rewrite, RouteCondition};
use nextfire_target::{HostingConfig, RouteManifest, Rewrites, build_server_entrypoint, patch_package_manifest};
use proptest::prelude::*;
use serde_json::{Map, Value};

fn path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9]{1,8}", 1..=3).prop_map(|parts| format!("/{}", parts.join("/")))
}

fn redirect_strategy() -> impl Strategy<Value = RedirectRule> {
    (
        path_strategy(),
        path_strategy(),
        prop::sample::select(vec![301u16, 302, 307, 308]),
        any::<bool>(),
    )
        .prop_map(|(source, destination, status_code, internal)| RedirectRule {
            source,
            destination,
            regex: None,
            status_code,
            internal,
        })
}

fn rewrite_strategy() -> impl Strategy<Value = Rewrite> {
    (path_strategy(), path_strategy(), any::<bool>(), any::<bool>()).prop_map(
        |(source, destination, conditional, locale)| Rewrite {
            source,
            destination,
            regex: Some("^.*$".to_string()),
            locale: locale.then_some(false),
            has: conditional.then(|| {
                vec![RouteCondition {
                    kind: "header".to_string(),
                    key: Some("x-test".to_string()),
                    value: None,
                }]
            }),
            missing: None,
        },
    )
}

fn package_strategy() -> impl Strategy<Value = Value> {
    (
        prop::collection::btree_map("[a-z-]{1,12}", "\\^[0-9]\\.[0-9]\\.[0-9]", 0..6),
        prop::option::of("[0-9]{2}"),
    )
        .prop_map(|(dependencies, node)| {
            let mut manifest = Map::new();
            manifest.insert("name".to_string(), Value::String("app".to_string()));
            manifest.insert(
                "dependencies".to_string(),
                Value::Object(
                    dependencies
                        .into_iter()
                        .map(|(name, version)| (name, Value::String(version)))
                        .collect(),
                ),
            );
            if let Some(node) = node {
                let mut engines = Map::new();
                engines.insert("node".to_string(), Value::String(node));
                manifest.insert("engines".to_string(), Value::Object(engines));
            }
            Value::Object(manifest)
        })
}

fn config() -> DeployConfig {
    DeployConfig {
        node_version: Some("18".to_string()),
        ..DeployConfig::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: redirects keep manifest order, lose internal entries, and
    /// carry their status code as `type`.
    #[test]
    fn prop_redirects_filter_and_order(redirects in prop::collection::vec(redirect_strategy(), 0..20)) {
        let manifest = RouteManifest { redirects: redirects.clone(), ..RouteManifest::default() };
        let hosting = HostingConfig::from_manifest(&manifest);

        let expected: Vec<_> = redirects.iter().filter(|r| !r.internal).collect();
        prop_assert_eq!(hosting.redirects.len(), expected.len());
        for (out, input) in hosting.redirects.iter().zip(expected) {
            prop_assert_eq!(&out.source, &input.source);
            prop_assert_eq!(&out.destination, &input.destination);
            prop_assert_eq!(out.kind, input.status_code);
        }
    }

    /// Property: conditional rewrites vanish; the rest appear in order with
    /// only `source` and `destination`.
    #[test]
    fn prop_rewrites_filter_and_order(
        rewrites in prop::collection::vec(rewrite_strategy(), 0..20),
        phased in any::<bool>(),
    ) {
        let rewrites_field = if phased {
            Rewrites::Phased(nextfire_target::manifest::PhasedRewrites {
                before_files: rewrites.clone(),
                after_files: rewrites.clone(),
                fallback: Vec::new(),
            })
        } else {
            Rewrites::Flat(rewrites.clone())
        };
        let manifest = RouteManifest { rewrites: rewrites_field, ..RouteManifest::default() };
        let hosting = HostingConfig::from_manifest(&manifest);

        let expected: Vec<_> = rewrites.iter().filter(|r| r.has.is_none()).collect();
        prop_assert_eq!(hosting.rewrites.len(), expected.len());
        for (out, input) in hosting.rewrites.iter().zip(expected) {
            prop_assert_eq!(&out.source, &input.source);
            prop_assert_eq!(&out.destination, &input.destination);

            let value = serde_json::to_value(out).unwrap();
            prop_assert_eq!(value.as_object().unwrap().len(), 2);
        }
    }

    /// Property: patching twice equals patching once.
    #[test]
    fn prop_package_patch_idempotent(manifest in package_strategy(), with_client in any::<bool>()) {
        let mut config = config();
        if with_client {
            config.client = Some(ClientOptions::default());
        }

        let once = patch_package_manifest(&manifest, &config).unwrap();
        let reparsed: Value = serde_json::from_str(&once).unwrap();
        let twice = patch_package_manifest(&reparsed, &config).unwrap();
        prop_assert_eq!(&once, &twice);

        // Pinned versions survive.
        for (name, version) in manifest["dependencies"].as_object().unwrap() {
            prop_assert_eq!(&reparsed["dependencies"][name], version);
        }
    }

    /// Property: the server script is a pure function of its inputs, and
    /// contains the session block iff client options are present.
    #[test]
    fn prop_entrypoint_deterministic(
        name in "[a-zA-Z_$][a-zA-Z0-9_$]{0,12}",
        region in "[a-z]{2,8}-[a-z]{2,8}[0-9]",
        v1 in any::<bool>(),
        api_key in prop::option::of("[A-Za-z0-9]{4,16}"),
    ) {
        let generation = if v1 { Generation::V1 } else { Generation::V2 };
        let target = FunctionTarget::new(generation, name.clone(), region);
        let client = api_key.map(|key| {
            let mut options = Map::new();
            options.insert("apiKey".to_string(), Value::String(key));
            ClientOptions::new(options)
        });

        let first = build_server_entrypoint(&target, client.as_ref());
        let second = build_server_entrypoint(&target, client.as_ref());
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.contains("/__next/cookie"), client.is_some());
        let export = format!("exports.{} = ", name);
        prop_assert!(first.contains(&export));
    }
}
