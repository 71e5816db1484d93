//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DirectorySource` - Produces the read-only professor directory at startup

mod directory_source;

pub use directory_source::{DirectoryLoadError, DirectorySource};
