//! Directory Source Port - Interface for loading the professor directory.
//!
//! The directory is read exactly once, before the server starts accepting
//! requests. Any failure here is fatal to startup.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::directory::Directory;
use crate::domain::foundation::ValidationError;

/// Errors that can occur while loading the directory
#[derive(Debug, thiserror::Error)]
pub enum DirectoryLoadError {
    #[error("Directory source not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read directory source {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },

    #[error("Unsupported directory source format: {} (expected .json, .yaml or .yml)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Malformed directory source: {0}")]
    Malformed(String),

    #[error("Invalid directory contents: {0}")]
    Invalid(#[from] ValidationError),
}

/// Port for producing the directory at startup
#[async_trait]
pub trait DirectorySource: Send + Sync {
    /// Load and validate the directory
    ///
    /// # Errors
    /// Returns `DirectoryLoadError` if the source is missing, unreadable,
    /// malformed, or violates directory invariants
    async fn load(&self) -> Result<Directory, DirectoryLoadError>;

    /// Human-readable description of where the directory comes from
    fn describe(&self) -> String;
}
