//! In-memory Directory Source Adapter
//!
//! Hands out a directory built in code. Used by tests and local tooling
//! that do not want a file on disk.

use async_trait::async_trait;

use crate::domain::directory::Directory;
use crate::ports::{DirectoryLoadError, DirectorySource};

/// Directory source backed by an already-built directory
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectorySource {
    directory: Directory,
}

impl InMemoryDirectorySource {
    pub fn new(directory: Directory) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl DirectorySource for InMemoryDirectorySource {
    async fn load(&self) -> Result<Directory, DirectoryLoadError> {
        self.directory.validate()?;
        Ok(self.directory.clone())
    }

    fn describe(&self) -> String {
        format!(
            "in-memory directory ({} universities)",
            self.directory.university_count()
        )
    }
}
