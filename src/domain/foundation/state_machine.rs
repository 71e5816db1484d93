//! State machine trait for enumerated lifecycle states.

use super::ValidationError;

/// Trait for enums whose values form a state machine.
///
/// Implementors list the legal edges; checked transitions come for free.
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if moving from self to target is a legal edge.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns every state reachable in one step from self.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Moves to target, or reports the illegal edge.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }
}
