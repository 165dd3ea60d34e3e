//! Router configuration for the relay server.

use axum::{routing::any, Router};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::AppState;

/// Platform-style path the static site's form posts to.
pub const FUNCTION_PATH: &str = "/.netlify/functions/contact";

/// Create the router. Every method is routed so the relay answers 405 itself.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/contact", any(handlers::submit_contact))
        .route(FUNCTION_PATH, any(handlers::submit_contact))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
