pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers as generation;
use crate::record::handlers as record;
use crate::render::handlers as render;
use crate::state::AppState;
use crate::storage::handlers as storage;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session editing
        .route("/api/v1/session", post(record::handle_new_session))
        .route("/api/v1/session/field", post(record::handle_set_field))
        .route(
            "/api/v1/session/experience/add",
            post(record::handle_add_experience),
        )
        .route(
            "/api/v1/session/experience/remove",
            post(record::handle_remove_experience),
        )
        .route("/api/v1/session/slots", post(record::handle_slots))
        // Prior submissions and generation
        .route("/api/v1/session/load", post(storage::handle_load_submission))
        .route("/api/v1/session/generate", post(generation::handle_generate))
        .route("/api/v1/submissions", get(storage::handle_list_submissions))
        // Rendering
        .route("/api/v1/render/preview", post(render::handle_preview))
        .route("/api/v1/render/pdf", post(render::handle_pdf))
        .with_state(state)
}
