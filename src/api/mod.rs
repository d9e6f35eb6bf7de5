//! API module
//!
//! HTTP API endpoints, middleware, and router assembly.

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::{AppState, Config};

pub mod middleware;
pub mod routes;

pub use routes::create_router;

/// Build the full application router.
///
/// Layers execute outside-in: trace -> CORS -> logging -> auth -> routes.
/// The 404 fallback is registered before the auth layer so that unmatched
/// paths still authenticate first, and preflight requests short-circuit in
/// the auth layer with 204.
pub fn build_router(config: &Config, state: AppState) -> Router {
    let api_router = create_router();

    let api_router = if config.base_path.is_empty() {
        api_router
    } else {
        Router::new().nest(&config.base_path, api_router)
    };

    api_router
        .fallback(routes::endpoint_not_found)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::tenant_auth,
        ))
        .layer(axum::middleware::from_fn(middleware::request_logging))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
