//! Dialogue state machine.
//!
//! The state is held by the client and echoed back on every turn; the
//! server never stores it.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{StateMachine, ValidationError};

/// Which branch of the conversation runs next.
///
/// - `Greeting`: fresh conversation, nothing asked yet
/// - `WaitingForUniversity`: asked which university
/// - `WaitingForClass`: university resolved, asked which class
/// - `Complete`: results delivered; the next turn starts over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DialogueState {
    #[default]
    Greeting,
    WaitingForUniversity,
    WaitingForClass,
    Complete,
}

impl DialogueState {
    pub const ALL: [DialogueState; 4] = [
        DialogueState::Greeting,
        DialogueState::WaitingForUniversity,
        DialogueState::WaitingForClass,
        DialogueState::Complete,
    ];

    /// Wire name of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            DialogueState::Greeting => "greeting",
            DialogueState::WaitingForUniversity => "waiting_for_university",
            DialogueState::WaitingForClass => "waiting_for_class",
            DialogueState::Complete => "complete",
        }
    }
}

impl FromStr for DialogueState {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| ValidationError::invalid_format("state", format!("unknown state '{s}'")))
    }
}

impl fmt::Display for DialogueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StateMachine for DialogueState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use DialogueState::*;
        matches!(
            (self, target),
            // Opening prompt, or restart after results
            (Greeting, WaitingForUniversity) |
            (Complete, WaitingForUniversity) |
            // Unrecognised university, ask again
            (WaitingForUniversity, WaitingForUniversity) |
            (WaitingForUniversity, WaitingForClass) |
            // Unrecognised class, ask again
            (WaitingForClass, WaitingForClass) |
            (WaitingForClass, Complete) |
            // University missing from the carried context
            (WaitingForClass, WaitingForUniversity)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use DialogueState::*;
        match self {
            Greeting => vec![WaitingForUniversity],
            WaitingForUniversity => vec![WaitingForUniversity, WaitingForClass],
            WaitingForClass => vec![WaitingForClass, Complete, WaitingForUniversity],
            Complete => vec![WaitingForUniversity],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod wire_format {
        use super::*;

        #[test]
        fn default_state_is_greeting() {
            assert_eq!(DialogueState::default(), DialogueState::Greeting);
        }

        #[test]
        fn serializes_to_snake_case() {
            let json = serde_json::to_string(&DialogueState::WaitingForClass).unwrap();
            assert_eq!(json, "\"waiting_for_class\"");
        }

        #[test]
        fn as_str_matches_serde_name() {
            for state in DialogueState::ALL {
                let json = serde_json::to_string(&state).unwrap();
                assert_eq!(json, format!("\"{}\"", state.as_str()));
            }
        }

        #[test]
        fn parses_every_known_state() {
            for state in DialogueState::ALL {
                assert_eq!(state.as_str().parse::<DialogueState>(), Ok(state));
            }
        }

        #[test]
        fn strict_parse_rejects_unknown() {
            assert!("waiting".parse::<DialogueState>().is_err());
            assert!("GREETING".parse::<DialogueState>().is_err());
        }
    }

    mod state_machine_trait {
        use super::*;

        #[test]
        fn greeting_only_moves_to_waiting_for_university() {
            assert_eq!(
                DialogueState::Greeting.valid_transitions(),
                vec![DialogueState::WaitingForUniversity]
            );
        }

        #[test]
        fn greeting_cannot_skip_to_class() {
            assert!(!DialogueState::Greeting.can_transition_to(&DialogueState::WaitingForClass));
        }

        #[test]
        fn complete_restarts_instead_of_terminating() {
            assert!(!DialogueState::Complete.valid_transitions().is_empty());
            assert!(DialogueState::Complete.can_transition_to(&DialogueState::WaitingForUniversity));
        }

        #[test]
        fn waiting_for_class_can_regress() {
            assert!(DialogueState::WaitingForClass
                .can_transition_to(&DialogueState::WaitingForUniversity));
        }

        #[test]
        fn can_transition_to_agrees_with_valid_transitions() {
            for from in DialogueState::ALL {
                for to in DialogueState::ALL {
                    assert_eq!(
                        from.can_transition_to(&to),
                        from.valid_transitions().contains(&to),
                        "{from:?} -> {to:?}"
                    );
                }
            }
        }
    }
}
