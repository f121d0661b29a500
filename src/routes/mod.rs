//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every document endpoint lives under `/api/documents`. Handlers translate
//! JSON to document service calls and map `DocumentError` to a status code
//! plus a `{code, message, retryable}` body.

pub mod documents;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{delete, get, patch, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/documents", get(documents::list_documents).post(documents::open_document))
        .route("/api/documents/{id}", get(documents::get_document).delete(documents::close_document))
        .route("/api/documents/{id}/blocks", post(documents::add_block))
        .route(
            "/api/documents/{id}/blocks/{block_id}",
            delete(documents::remove_block).patch(documents::update_block),
        )
        .route("/api/documents/{id}/blocks/{block_id}/move", post(documents::move_block))
        .route("/api/documents/{id}/blocks/{block_id}/resize", post(documents::resize_block))
        .route("/api/documents/{id}/blocks/{block_id}/reorder", post(documents::reorder_block))
        .route(
            "/api/documents/{id}/selection",
            get(documents::get_selection).put(documents::set_selection),
        )
        .route("/api/documents/{id}/canvas", patch(documents::update_canvas))
        .route("/api/documents/{id}/commands", post(documents::apply_command))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
