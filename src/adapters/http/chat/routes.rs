//! Axum router configuration for the chat endpoint.

use axum::{routing::post, Router};

use super::handlers::{chat, ChatAppState};

/// Create the chat router.
///
/// # Routes
///
/// - `POST /chat` - Run one conversational turn
pub fn chat_router() -> Router<ChatAppState> {
    Router::new().route("/chat", post(chat))
}
