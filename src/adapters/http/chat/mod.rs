//! Chat HTTP adapter - the conversational turn endpoint.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ChatRequest, ChatResponse, ProfessorResponse};
pub use handlers::ChatAppState;
pub use routes::chat_router;
