//! Site HTTP adapter - landing page and health check.

pub mod handlers;
pub mod routes;

pub use handlers::{HealthResponse, SiteAppState};
pub use routes::site_router;
