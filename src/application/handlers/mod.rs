//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod dialogue;

pub use dialogue::{ProcessTurnCommand, ProcessTurnHandler};
