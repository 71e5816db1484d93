//! Directory module.
//!
//! The immutable University -> Class -> Professor structure loaded at
//! startup, plus its read-only queries (fuzzy university search, exact class
//! lookup, listings).

#[allow(clippy::module_inception)]
mod directory;
mod professor;

pub use directory::{ClassOfferings, Directory, University};
pub use professor::Professor;
