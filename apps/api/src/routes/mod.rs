pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::editor::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session
        .route("/api/v1/session", get(handlers::handle_get_session))
        .route(
            "/api/v1/session/template",
            put(handlers::handle_set_template),
        )
        .route("/api/v1/session/tab", put(handlers::handle_set_tab))
        // Document
        .route("/api/v1/document", get(handlers::handle_get_document))
        .route(
            "/api/v1/document/actions",
            post(handlers::handle_dispatch),
        )
        // AI
        .route("/api/v1/enhance", post(handlers::handle_enhance))
        .route(
            "/api/v1/cover-letter",
            put(handlers::handle_set_cover_letter),
        )
        .route(
            "/api/v1/cover-letter/generate",
            post(handlers::handle_generate_cover_letter),
        )
        // Preview & export
        .route("/api/v1/preview", get(handlers::handle_preview))
        .route("/api/v1/preview/html", get(handlers::handle_preview_html))
        .route("/api/v1/export", get(handlers::handle_export))
        .with_state(state)
}
