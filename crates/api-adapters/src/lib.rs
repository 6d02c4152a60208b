//! # api-adapters
//!
//! The web routing and orchestration layer for Driftboard.

pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;
use std::time::Duration;

use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use handlers::AppState;

/// Configures the routes for the board.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/messages",
            get(handlers::latest_messages).post(handlers::send_message),
        )
        .route("/messages/random", get(handlers::random_message))
        .route("/admin/export", get(handlers::admin_export))
        .layer(TraceLayer::new_for_http())
        .layer(cors_policy())
        .with_state(state)
}

// Configures CORS (Cross-Origin Resource Sharing).
// Important if the UI and API ever live on different subdomains.
fn cors_policy() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .max_age(Duration::from_secs(3600))
}
