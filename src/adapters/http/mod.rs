//! HTTP adapters - REST API implementations.
//!
//! Each module has its own HTTP adapter for endpoint exposure; `app`
//! assembles them into the served router.

pub mod app;
pub mod chat;
pub mod site;

// Re-export key types for convenience
pub use app::build_router;
pub use chat::{chat_router, ChatAppState};
pub use site::{site_router, SiteAppState};
