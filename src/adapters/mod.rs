//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `directory` - Directory sources (file, in-memory)
//! - `http` - Axum routers, handlers and DTOs

pub mod directory;
pub mod http;

pub use directory::{FileDirectorySource, InMemoryDirectorySource};
