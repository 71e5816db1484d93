//! Application router assembly.
//!
//! Merges the module routers and wraps them in the cross-cutting layers:
//! request ids, request tracing, timeouts, compression and CORS.

use std::sync::Arc;

use axum::Router;
use http::{header::HeaderName, HeaderValue, Method};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::application::ProcessTurnHandler;
use crate::config::ServerConfig;
use crate::domain::directory::Directory;

use super::chat::{chat_router, ChatAppState};
use super::site::{site_router, SiteAppState};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Builds the complete HTTP application around a loaded directory.
pub fn build_router(directory: Arc<Directory>, server: &ServerConfig) -> Router {
    let chat_state = ChatAppState {
        handler: Arc::new(ProcessTurnHandler::new(directory.clone())),
    };
    let site_state = SiteAppState { directory };

    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .merge(chat_router().with_state(chat_state))
        .merge(site_router().with_state(site_state))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(request_id))
                .layer(TimeoutLayer::new(server.request_timeout()))
                .layer(CompressionLayer::new())
                .layer(cors_layer(server)),
        )
}

/// Any origin unless explicit origins are configured.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(AllowOrigin::list(origins))
    }
}
