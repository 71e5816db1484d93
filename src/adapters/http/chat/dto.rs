//! HTTP DTOs for the chat endpoint.
//!
//! These types decouple the wire format from domain types, allowing independent evolution.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::application::ProcessTurnCommand;
use crate::domain::dialogue::{DialogueState, TurnOutcome};
use crate::domain::directory::Professor;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One conversational turn as sent by the client.
///
/// Every field is optional; absent, `null` or non-string values fall back to
/// an empty message, the `greeting` state and no university.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default, deserialize_with = "string_or_none")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub university: Option<String>,
}

/// Accepts any JSON value; only strings are kept.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

impl From<ChatRequest> for ProcessTurnCommand {
    fn from(req: ChatRequest) -> Self {
        Self {
            message: req.message.unwrap_or_default(),
            state: req
                .state
                .unwrap_or_else(|| DialogueState::Greeting.as_str().to_string()),
            university: req.university.unwrap_or_default(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Professor entry in a completed result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfessorResponse {
    pub name: String,
    pub rating: f64,
    pub difficulty: f64,
    pub reviews: Vec<String>,
}

impl From<Professor> for ProfessorResponse {
    fn from(prof: Professor) -> Self {
        Self {
            name: prof.name().to_string(),
            rating: prof.rating().value(),
            difficulty: prof.difficulty().value(),
            reviews: prof.reviews().to_vec(),
        }
    }
}

/// Reply plus the context the client must send back next turn.
///
/// `class_name` and `professors` are present only when a ranking was produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub state: DialogueState,
    pub university: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professors: Option<Vec<ProfessorResponse>>,
}

impl From<TurnOutcome> for ChatResponse {
    fn from(outcome: TurnOutcome) -> Self {
        let (class_name, professors) = match outcome.result {
            Some(result) => (
                Some(result.class_name),
                Some(result.professors.into_iter().map(Into::into).collect()),
            ),
            None => (None, None),
        };

        Self {
            response: outcome.reply,
            state: outcome.next_state,
            university: outcome.university,
            class_name,
            professors,
        }
    }
}
