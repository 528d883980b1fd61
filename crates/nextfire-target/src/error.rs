//! Error types for Firebase target operations.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for target operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while translating a build into Firebase artifacts
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// The build's routes manifest does not exist
    #[error("routes manifest not found: {}", path.display())]
    #[diagnostic(
        code(nextfire::target::manifest_not_found),
        help("Run `next build` first, or point `dist_dir` at the Next.js build output")
    )]
    ManifestNotFound { path: PathBuf },

    /// The routes manifest is not valid JSON or has an unexpected shape
    #[error("malformed routes manifest {}: {source}", path.display())]
    #[diagnostic(code(nextfire::target::malformed_manifest))]
    MalformedManifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The package manifest cannot be patched
    #[error("invalid package.json: {0}")]
    #[diagnostic(code(nextfire::target::invalid_package_manifest))]
    InvalidPackageManifest(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    #[diagnostic(code(nextfire::target::json))]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    #[diagnostic(code(nextfire::target::io))]
    Io(#[from] std::io::Error),

    /// I/O error with the file it happened on
    #[error("failed to write {}: {source}", path.display())]
    #[diagnostic(code(nextfire::target::write_failed))]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn invalid_package(message: impl Into<String>) -> Self {
        Self::InvalidPackageManifest(message.into())
    }
}
