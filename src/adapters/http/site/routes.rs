//! Axum router configuration for the landing page and health check.

use axum::{routing::get, Router};

use super::handlers::{health, landing_page, SiteAppState};

/// Create the site router.
///
/// # Routes
///
/// - `GET /` - Landing page
/// - `GET /health` - Health check
pub fn site_router() -> Router<SiteAppState> {
    Router::new()
        .route("/", get(landing_page))
        .route("/health", get(health))
}
