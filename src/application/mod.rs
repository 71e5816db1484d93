//! Application layer - Commands and Handlers.
//!
//! This layer drives domain operations on behalf of the HTTP adapter and
//! owns the shared, read-only directory.

pub mod handlers;

pub use handlers::{ProcessTurnCommand, ProcessTurnHandler};
