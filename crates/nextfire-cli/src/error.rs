//! Error handling for the nextfire CLI.
//!
//! `CliError` is the top-level error returned by commands. Library errors from
//! `nextfire-config` and `nextfire-target` convert into it automatically, and
//! [`cli_error_to_miette`] turns it into a report in `main`.
//!
//! # Example
//!
//! ```rust,no_run
//! use nextfire_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_client_options(path: &Path) -> Result<serde_json::Value> {
//!     let text = std::fs::read_to_string(path).with_path(path)?;
//!     serde_json::from_str(&text).with_hint("Client options must be a JSON object")
//! }
//! ```

mod report;

use std::path::PathBuf;

use nextfire_config::ConfigError;
use thiserror::Error;

pub use report::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration discovery, loading, or validation failed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Translating the build or writing artifacts failed
    #[error(transparent)]
    Target(#[from] nextfire_target::Error),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Append a hint to the error message.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;

    /// Prefix the error message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }

    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_from_config_error() {
        let cli_err: CliError = ConfigError::NotFound.into();
        assert!(matches!(cli_err, CliError::Config(_)));
        assert_eq!(cli_err.to_string(), "Configuration error: config not found");
    }

    #[test]
    fn test_cli_error_from_target_error() {
        let target_err = nextfire_target::Error::ManifestNotFound {
            path: PathBuf::from(".next/routes-manifest.json"),
        };
        let cli_err: CliError = target_err.into();
        assert!(matches!(cli_err, CliError::Target(_)));
        assert!(cli_err.to_string().contains("routes manifest not found"));
    }

    #[test]
    fn test_result_ext_with_path() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));

        let err = result.with_path("/test/client.json").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(ref p) if p == &PathBuf::from("/test/client.json")));
    }

    #[test]
    fn test_result_ext_with_path_keeps_other_errors() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));

        let err = result.with_path("/test/client.json").unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[test]
    fn test_result_ext_with_hint() {
        let result: std::result::Result<(), ConfigError> = Err(ConfigError::NotFound);

        let err = result.with_hint("Create nextfire.toml").unwrap_err();
        assert!(err.to_string().ends_with("Hint: Create nextfire.toml"));
    }

    #[test]
    fn test_result_ext_context() {
        let result: std::result::Result<(), ConfigError> = Err(ConfigError::EmptyRegion);

        let err = result.context("Failed to load configuration").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to load configuration: Configuration error: function region cannot be empty"
        );
    }
}
