//! HTTP handlers for the landing page and health check.

use std::sync::Arc;

use axum::{extract::State, response::Html, Json};
use serde::Serialize;

use crate::domain::directory::Directory;

const LANDING_PAGE: &str = include_str!("index.html");

/// Application state for site endpoints.
#[derive(Clone)]
pub struct SiteAppState {
    pub directory: Arc<Directory>,
}

/// Health report with the size of the loaded directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub universities: usize,
    pub classes: usize,
    pub professors: usize,
}

/// GET / - Landing page with a minimal chat client
pub async fn landing_page() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

/// GET /health - Liveness and directory summary
pub async fn health(State(state): State<SiteAppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        universities: state.directory.university_count(),
        classes: state.directory.class_count(),
        professors: state.directory.professor_count(),
    })
}
