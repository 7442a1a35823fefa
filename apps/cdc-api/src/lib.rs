//! CDC compliance assessment API.
//!
//! In-memory assessments over the checklist engine, plus the Gemini
//! document-analysis and chat integration. Router construction lives here
//! so integration tests can drive the service without binding a socket.

use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod error;
pub mod handlers;
pub mod models;
pub mod state;

pub use state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/assessment", post(handlers::create_assessment))
        .route("/api/assessment/:id", get(handlers::get_assessment))
        .route(
            "/api/assessment/:id/item/:item_id",
            patch(handlers::update_item),
        )
        .route("/api/assessment/:id/analyze", post(handlers::analyze))
        .route("/api/assessment/:id/chat", post(handlers::chat))
        .route("/api/assessment/:id/report", get(handlers::report))
        .route("/api/assessment/:id/export", get(handlers::export))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
