//! Dialogue engine.
//!
//! Computes one conversational turn from the message, the client-held state
//! and the previously resolved university. The engine only reads the
//! directory, so the same inputs always produce the same outcome.

use crate::domain::directory::Directory;

use super::ranking::{rank_professors, RankedResult};
use super::replies;
use super::state::DialogueState;

/// Everything the client needs to render the reply and send the next turn.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    pub reply: String,
    pub next_state: DialogueState,
    pub university: String,
    pub result: Option<RankedResult>,
}

impl TurnOutcome {
    fn prompt(reply: impl Into<String>, next_state: DialogueState, university: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            next_state,
            university: university.into(),
            result: None,
        }
    }

    /// Returns true if the turn delivered a ranking.
    pub fn is_complete(&self) -> bool {
        self.result.is_some()
    }
}

/// Runs turns against a directory.
#[derive(Debug, Clone, Copy)]
pub struct DialogueEngine<'a> {
    directory: &'a Directory,
}

impl<'a> DialogueEngine<'a> {
    pub fn new(directory: &'a Directory) -> Self {
        Self { directory }
    }

    /// Advances the conversation by one turn.
    ///
    /// `message` is trimmed before use. `university` is only consulted in
    /// `WaitingForClass`, where it must name a directory entry exactly.
    pub fn step(&self, message: &str, state: DialogueState, university: &str) -> TurnOutcome {
        let message = message.trim();
        match state {
            DialogueState::Greeting | DialogueState::Complete => Self::greet(),
            DialogueState::WaitingForUniversity => self.resolve_university(message),
            DialogueState::WaitingForClass => self.resolve_class(message, university),
        }
    }

    fn greet() -> TurnOutcome {
        TurnOutcome::prompt(replies::GREETING, DialogueState::WaitingForUniversity, "")
    }

    fn resolve_university(&self, message: &str) -> TurnOutcome {
        match self.directory.find_university(message) {
            Some(found) => TurnOutcome::prompt(
                replies::ask_for_class(found),
                DialogueState::WaitingForClass,
                found,
            ),
            None => TurnOutcome::prompt(
                replies::unknown_university(&self.directory.list_universities()),
                DialogueState::WaitingForUniversity,
                "",
            ),
        }
    }

    fn resolve_class(&self, message: &str, university: &str) -> TurnOutcome {
        if !self.directory.contains_university(university) {
            return TurnOutcome::prompt(
                replies::UNIVERSITY_REQUIRED,
                DialogueState::WaitingForUniversity,
                "",
            );
        }

        let Some(offerings) = self.directory.find_class(university, message) else {
            return TurnOutcome::prompt(
                replies::unknown_class(university, &self.directory.list_classes(university)),
                DialogueState::WaitingForClass,
                university,
            );
        };

        let professors = rank_professors(offerings);
        TurnOutcome {
            reply: replies::ranked_professors(message, university, &professors),
            next_state: DialogueState::Complete,
            university: university.to_string(),
            result: Some(RankedResult {
                class_name: message.to_string(),
                professors,
            }),
        }
    }
}
