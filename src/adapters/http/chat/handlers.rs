//! HTTP handlers for the chat endpoint.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::application::ProcessTurnHandler;

use super::dto::{ChatRequest, ChatResponse};

/// Application state for chat endpoints.
#[derive(Clone)]
pub struct ChatAppState {
    pub handler: Arc<ProcessTurnHandler>,
}

/// POST /chat - Run one conversational turn
///
/// Lookup failures are part of the conversation, so a well-formed request
/// always gets 200 with a reply.
pub async fn chat(
    State(state): State<ChatAppState>,
    Json(req): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let outcome = state.handler.handle(req.into());
    Json(outcome.into())
}
