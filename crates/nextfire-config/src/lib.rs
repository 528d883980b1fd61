//! # nextfire-config
//!
//! Deployment configuration for nextfire: which Cloud Function serves the
//! Next.js app, where the build lives, and the optional Firebase web config
//! that turns on session bridging in the generated server.
//!
//! Configuration is layered with figment:
//! defaults < `nextfire.toml` (or the `nextfire` field of `package.json`)
//! < `NEXTFIRE_*` environment variables < CLI overrides.

pub mod config;
pub mod discovery;
pub mod error;
pub mod function;
pub mod toolchain;

// Re-export main types
pub use config::*;
pub use error::*;
pub use function::*;

pub use discovery::{ConfigDiscovery, ConfigSource};
pub use toolchain::{DEFAULT_NODE_MAJOR, NodeToolchain};
