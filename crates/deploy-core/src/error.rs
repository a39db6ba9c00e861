//! Error types for deploy-core

use std::path::PathBuf;

/// Result type for deploy-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving configuration
///
/// Only the base fragment can fail resolution. Absent secrets, flags and
/// versions resolve to empty or default values.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Base configuration file does not exist
    #[error("Base configuration not found at {path}")]
    MissingBaseFragment { path: PathBuf },

    /// Base configuration file exists but is not valid TOML
    #[error("Invalid base configuration at {path}: {message}")]
    InvalidBaseFragment { path: PathBuf, message: String },

    // Transparent wrappers for underlying crate errors
    /// Metadata error from deploy-meta
    #[error(transparent)]
    Meta(#[from] deploy_meta::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
