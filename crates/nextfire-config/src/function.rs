//! The Cloud Function that serves the Next.js app.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Cloud Functions generation.
///
/// Serialized as the bare integers `1` and `2`; anything else is rejected
/// when the configuration is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Generation {
    V1,
    #[default]
    V2,
}

impl Generation {
    /// Platform label used in function descriptors: `gcfv1` or `gcfv2`.
    pub fn platform(self) -> &'static str {
        match self {
            Generation::V1 => "gcfv1",
            Generation::V2 => "gcfv2",
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Generation::V1 => 1,
            Generation::V2 => 2,
        }
    }
}

impl TryFrom<u8> for Generation {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(Generation::V1),
            2 => Ok(Generation::V2),
            other => Err(format!("unsupported functions generation {other} (expected 1 or 2)")),
        }
    }
}

impl From<Generation> for u8 {
    fn from(generation: Generation) -> Self {
        generation.number()
    }
}

impl FromStr for Generation {
    type Err = String;

    /// Accepts `1`, `2`, `v1`, `v2`, `gcfv1` and `gcfv2`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let digits = lowered
            .strip_prefix("gcfv")
            .or_else(|| lowered.strip_prefix('v'))
            .unwrap_or(&lowered);
        digits
            .parse::<u8>()
            .map_err(|_| format!("invalid functions generation '{s}' (expected 1 or 2)"))
            .and_then(Generation::try_from)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Deployer-supplied function descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionTarget {
    pub generation: Generation,

    /// Function identifier; doubles as the JSON key in the descriptor and the
    /// exported symbol of the generated server.
    pub name: String,

    pub region: String,
}

impl Default for FunctionTarget {
    fn default() -> Self {
        Self {
            generation: Generation::V2,
            name: "ssr".to_string(),
            region: "us-central1".to_string(),
        }
    }
}

impl FunctionTarget {
    pub fn new(generation: Generation, name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            generation,
            name: name.into(),
            region: region.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_identifier(&self.name).map_err(|reason| ConfigError::InvalidFunctionName {
            name: self.name.clone(),
            reason,
        })?;

        if self.region.trim().is_empty() {
            return Err(ConfigError::EmptyRegion);
        }

        Ok(())
    }
}

/// Check that `name` is a valid JavaScript identifier.
///
/// Must start with a letter, underscore, or dollar sign and continue with
/// letters, digits, underscores, or dollar signs.
pub fn validate_identifier(name: &str) -> std::result::Result<(), String> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err("name cannot be empty".to_string());
    };

    if !first.is_alphabetic() && first != '_' && first != '$' {
        return Err("must start with a letter, underscore, or dollar sign".to_string());
    }

    if chars.any(|c| !c.is_alphanumeric() && c != '_' && c != '$') {
        return Err("can only contain letters, numbers, underscores, or dollar signs".to_string());
    }

    Ok(())
}
