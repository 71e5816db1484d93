//! ProcessTurnHandler - Run one conversational turn

use std::sync::Arc;

use crate::domain::dialogue::{DialogueEngine, DialogueState, TurnOutcome};
use crate::domain::directory::Directory;
use crate::domain::foundation::StateMachine;

/// Command carrying one turn exactly as the client sent it
#[derive(Debug, Clone, Default)]
pub struct ProcessTurnCommand {
    pub message: String,
    /// Wire name of the client-held state; unknown values restart the dialogue
    pub state: String,
    pub university: String,
}

/// Handler for conversational turns
///
/// Holds the shared directory; every call is independent of every other.
#[derive(Debug, Clone)]
pub struct ProcessTurnHandler {
    directory: Arc<Directory>,
}

impl ProcessTurnHandler {
    pub fn new(directory: Arc<Directory>) -> Self {
        Self { directory }
    }

    pub fn handle(&self, cmd: ProcessTurnCommand) -> TurnOutcome {
        let state = match cmd.state.parse::<DialogueState>() {
            Ok(state) => state,
            Err(e) => {
                tracing::debug!("Restarting dialogue: {}", e);
                DialogueState::default()
            }
        };

        let outcome = DialogueEngine::new(&self.directory).step(&cmd.message, state, &cmd.university);

        match state.transition_to(outcome.next_state) {
            Ok(next) => tracing::debug!(
                from = %state,
                to = %next,
                university = %outcome.university,
                "Dialogue turn processed"
            ),
            Err(e) => tracing::warn!("Dialogue turn left the state machine: {}", e),
        }
        if let Some(result) = &outcome.result {
            tracing::info!(
                university = %outcome.university,
                class_name = %result.class_name,
                professors = result.professors.len(),
                "Ranked professors for class"
            );
        }

        outcome
    }
}
