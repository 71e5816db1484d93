//! Foundation module - Shared domain primitives.
//!
//! Value objects, error types and the state machine trait used by the
//! directory and dialogue modules.

mod errors;
mod score;
mod state_machine;

pub use errors::ValidationError;
pub use score::Score;
pub use state_machine::StateMachine;
