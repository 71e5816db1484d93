//! File-based Directory Source Adapter
//!
//! Reads the professor directory from a JSON or YAML file. The encoding is
//! chosen from the file extension; both share the same schema:
//!
//! ```text
//! { "universities": { "<university>": { "<class>": [ { name, rating, difficulty, reviews } ] } } }
//! ```

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::directory::Directory;
use crate::ports::{DirectoryLoadError, DirectorySource};

/// Encodings accepted for the directory file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceFormat {
    Json,
    Yaml,
}

impl SourceFormat {
    fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(SourceFormat::Json),
            "yaml" | "yml" => Some(SourceFormat::Yaml),
            _ => None,
        }
    }

    fn parse(self, raw: &str) -> Result<Directory, DirectoryLoadError> {
        match self {
            SourceFormat::Json => serde_json::from_str(raw)
                .map_err(|e| DirectoryLoadError::Malformed(e.to_string())),
            SourceFormat::Yaml => serde_yaml::from_str(raw)
                .map_err(|e| DirectoryLoadError::Malformed(e.to_string())),
        }
    }
}

/// Loads the directory from a file on disk
#[derive(Debug, Clone)]
pub struct FileDirectorySource {
    path: PathBuf,
}

impl FileDirectorySource {
    /// Create a source reading from `path`
    ///
    /// # Example
    /// ```ignore
    /// let source = FileDirectorySource::new("./data/professors.json");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DirectorySource for FileDirectorySource {
    async fn load(&self) -> Result<Directory, DirectoryLoadError> {
        let format = SourceFormat::from_path(&self.path)
            .ok_or_else(|| DirectoryLoadError::UnsupportedFormat(self.path.clone()))?;

        let raw = fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => DirectoryLoadError::NotFound(self.path.clone()),
                _ => DirectoryLoadError::Io {
                    path: self.path.clone(),
                    message: e.to_string(),
                },
            })?;

        let directory = format.parse(&raw)?;
        directory.validate()?;

        tracing::debug!(
            path = %self.path.display(),
            format = ?format,
            universities = directory.university_count(),
            "Directory source parsed"
        );

        Ok(directory)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, TempDir};

    const VALID_JSON: &str = r#"{
        "universities": {
            "Stanford University": {
                "CS106A": [
                    { "name": "Mehran Sahami", "rating": 4.8, "difficulty": 3.0, "reviews": ["Great"] }
                ]
            },
            "MIT": { "6.006": [] }
        }
    }"#;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn loads_json_in_source_order() {
        let file = write_temp(".json", VALID_JSON);
        let directory = FileDirectorySource::new(file.path()).load().await.unwrap();

        assert_eq!(directory.list_universities(), vec!["Stanford University", "MIT"]);
        assert_eq!(directory.professor_count(), 1);
    }

    #[tokio::test]
    async fn loads_yaml() {
        let yaml = "universities:\n  MIT:\n    \"6.006\":\n      - name: Erik Demaine\n        rating: 5\n        difficulty: 4.2\n";
        let file = write_temp(".yaml", yaml);
        let directory = FileDirectorySource::new(file.path()).load().await.unwrap();

        let offerings = directory.find_class("MIT", "6.006").unwrap();
        assert_eq!(offerings.professors()[0].rating().value(), 5.0);
        assert!(offerings.professors()[0].reviews().is_empty());
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json");
        let result = FileDirectorySource::new(&path).load().await;

        assert!(matches!(result, Err(DirectoryLoadError::NotFound(p)) if p == path));
    }

    #[tokio::test]
    async fn unsupported_extension_is_rejected() {
        let file = write_temp(".csv", VALID_JSON);
        let result = FileDirectorySource::new(file.path()).load().await;

        assert!(matches!(result, Err(DirectoryLoadError::UnsupportedFormat(_))));
    }

    #[tokio::test]
    async fn malformed_json_is_rejected() {
        let file = write_temp(".json", "{ \"universities\": ");
        let result = FileDirectorySource::new(file.path()).load().await;

        assert!(matches!(result, Err(DirectoryLoadError::Malformed(_))));
    }

    #[tokio::test]
    async fn wrong_shape_is_rejected() {
        let file = write_temp(".json", r#"{ "universities": { "MIT": ["not", "a", "map"] } }"#);
        let result = FileDirectorySource::new(file.path()).load().await;

        assert!(matches!(result, Err(DirectoryLoadError::Malformed(_))));
    }

    #[tokio::test]
    async fn out_of_range_rating_is_rejected() {
        let json = r#"{ "universities": { "MIT": { "6.006": [
            { "name": "X", "rating": 7.5, "difficulty": 1.0, "reviews": [] }
        ] } } }"#;
        let file = write_temp(".json", json);
        let result = FileDirectorySource::new(file.path()).load().await;

        assert!(matches!(result, Err(DirectoryLoadError::Malformed(_))));
    }

    #[tokio::test]
    async fn blank_keys_are_invalid() {
        let file = write_temp(".json", r#"{ "universities": { "": {} } }"#);
        let result = FileDirectorySource::new(file.path()).load().await;

        assert!(matches!(result, Err(DirectoryLoadError::Invalid(_))));
    }

    #[test]
    fn describe_names_the_path() {
        let source = FileDirectorySource::new("data/professors.json");
        assert_eq!(source.describe(), "file data/professors.json");
        assert_eq!(source.path(), Path::new("data/professors.json"));
    }
}
