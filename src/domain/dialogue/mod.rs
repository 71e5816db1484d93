//! Dialogue domain module.
//!
//! The turn-based conversation that resolves a university, then a class,
//! then returns the best-rated professors. All context travels with the
//! client; nothing here holds per-conversation memory.

mod engine;
mod ranking;
pub mod replies;
mod state;

pub use engine::{DialogueEngine, TurnOutcome};
pub use ranking::{rank_professors, RankedResult, REVIEWS_SHOWN, TOP_PROFESSORS};
pub use state::DialogueState;
