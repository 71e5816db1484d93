//! Directory Source Adapters
//!
//! Implementations of the DirectorySource port.
//!
//! ## Available Adapters
//!
//! - **FileDirectorySource** - Reads a JSON or YAML file from disk
//! - **InMemoryDirectorySource** - Wraps a directory built in code (testing)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::directory::{FileDirectorySource, InMemoryDirectorySource};
//!
//! // Production: file-based source
//! let source = FileDirectorySource::new("./data/professors.json");
//!
//! // Testing: in-memory source
//! let source = InMemoryDirectorySource::new(directory);
//! ```

mod file_directory_source;
mod in_memory_directory_source;

pub use file_directory_source::FileDirectorySource;
pub use in_memory_directory_source::InMemoryDirectorySource;
