//! # nextfire-target
//!
//! Firebase deployment target for Next.js builds.
//!
//! Translates a Next.js build into the artifacts Firebase Hosting and Cloud
//! Functions consume:
//!
//! - [`translate_routes`]: `routes-manifest.json` → hosting headers, redirects, rewrites
//! - [`build_function_descriptor`]: the function deployment descriptor
//! - [`build_server_entrypoint`]: the generated `server.js`
//! - [`patch_package_manifest`]: `package.json` pointed at the generated server
//!
//! [`FirebaseTarget`] runs all four and writes the results to disk.

pub mod descriptor;
pub mod entrypoint;
pub mod error;
pub mod hosting;
pub mod manifest;
pub mod package;
pub mod routes;
pub mod target;

pub use descriptor::{SPEC_VERSION, build_function_descriptor};
pub use entrypoint::{COOKIE_ENDPOINT, SESSION_COOKIE, ServerScript, build_server_entrypoint};
pub use error::{Error, Result};
pub use hosting::{HostingConfig, HostingHeader, HostingRedirect, HostingRewrite, HostingSection};
pub use manifest::{ROUTES_MANIFEST, RouteManifest, Rewrites};
pub use package::{SERVER_ENTRYPOINT, patch_package_manifest};
pub use routes::translate_routes;
pub use target::{FirebaseTarget, OutputSummary};
