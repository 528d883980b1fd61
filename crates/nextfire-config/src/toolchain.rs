//! Detection of the local Node.js toolchain.

use std::process::Command;

/// Node major version used for `engines.node` when neither the config nor the
/// local toolchain provides one.
pub const DEFAULT_NODE_MAJOR: &str = "16";

/// The `node` binary found on `PATH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeToolchain {
    /// Full version without the leading `v`, e.g. `18.12.0`.
    pub version: String,
    /// Major component, e.g. `18`.
    pub major: String,
}

impl NodeToolchain {
    /// Run `node --version` and parse its output.
    ///
    /// Returns `None` when node is not installed or prints something
    /// unexpected.
    pub fn detect() -> Option<Self> {
        let output = Command::new("node").arg("--version").output().ok()?;
        if !output.status.success() {
            tracing::debug!("`node --version` exited with {}", output.status);
            return None;
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let toolchain = Self::parse(&stdout);
        if let Some(ref found) = toolchain {
            tracing::debug!("Detected node {}", found.version);
        }
        toolchain
    }

    /// Parse the output of `node --version` (`v18.12.0`).
    pub fn parse(output: &str) -> Option<Self> {
        let version = output.trim().trim_start_matches('v');
        let major = version.split('.').next()?;
        if major.is_empty() || !major.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        Some(Self {
            version: version.to_string(),
            major: major.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_node_version_output() {
        let toolchain = NodeToolchain::parse("v18.12.0\n").unwrap();
        assert_eq!(toolchain.version, "18.12.0");
        assert_eq!(toolchain.major, "18");
    }

    #[test]
    fn parses_without_prefix() {
        assert_eq!(NodeToolchain::parse("20.1.0").unwrap().major, "20");
    }

    #[test]
    fn rejects_garbage() {
        assert!(NodeToolchain::parse("").is_none());
        assert!(NodeToolchain::parse("command not found").is_none());
        assert!(NodeToolchain::parse("vX.1.0").is_none());
    }
}
