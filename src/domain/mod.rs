//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (scores, validation errors, state machine trait)
//! - `directory` - The University -> Class -> Professor lookup structure
//! - `dialogue` - Conversation state machine, matching and ranking

pub mod dialogue;
pub mod directory;
pub mod foundation;
