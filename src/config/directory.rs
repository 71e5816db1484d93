//! Directory source configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the professor directory is loaded from at startup
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryConfig {
    /// Path to a `.json`, `.yaml` or `.yml` file
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl DirectoryConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ValidationError::EmptyDirectoryPath);
        }
        Ok(())
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("data/professors.json")
}
