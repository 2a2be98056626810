//! Error types for unpub-cli.

use std::path::PathBuf;
use thiserror::Error;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Result type for unpub-cli operations.
pub type UnpubResult<T> = Result<T, UnpubError>;

/// Error type for unpub-cli operations.
#[derive(Debug, Error)]
pub enum UnpubError {
    /// Manifest not found.
    #[error("package.json not found at {0}")]
    ManifestNotFound(PathBuf),

    /// Manifest exists but cannot be used as a package identity.
    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    /// One-time passcode was not supplied.
    #[error("Missing one-time passcode")]
    MissingOtp,

    /// The registry command ran but did not succeed, or could not be spawned.
    /// Deliberately carries no underlying detail; the registry CLI already
    /// wrote its own diagnostics to the inherited streams.
    #[error("Failed to unpublish {name}@{version}")]
    UnpublishFailed { name: String, version: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error.
    #[error("{0}")]
    Generic(String),
}
