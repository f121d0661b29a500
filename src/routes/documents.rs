//! Document routes: JSON translation over the document service.

#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use grid::GridError;
use grid::command::{Applied, Command, LayoutChange, ReorderDirection};
use grid::doc::{Block, BlockStyle, StylePatch};
use grid::engine::Snapshot;
use grid::layout::{Layout, Span};
use grid::resize::{GridDelta, ResizeDirection};
use grid::selection::Selection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DocumentError, ErrorBody};
use crate::services::document::{self, BlockPatch};
use crate::state::AppState;

// =============================================================================
// BODIES
// =============================================================================

#[derive(Debug, Serialize)]
pub struct OpenedDocument {
    pub id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct AddBlockBody {
    pub kind: String,
    pub span: Span,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct MoveBody {
    pub col_start: i64,
    pub row_start: i64,
}

#[derive(Debug, Deserialize)]
pub struct ResizeBody {
    pub direction: ResizeDirection,
    #[serde(default)]
    pub col_change: i32,
    #[serde(default)]
    pub row_change: i32,
}

#[derive(Debug, Deserialize)]
pub struct ReorderBody {
    pub direction: ReorderDirection,
}

#[derive(Debug, Serialize)]
pub struct Removed {
    pub removed: bool,
}

#[derive(Debug, Serialize)]
pub struct Reordered {
    pub swapped: bool,
}

// =============================================================================
// ERROR MAPPING
// =============================================================================

pub(crate) fn document_error_to_status(err: &DocumentError) -> StatusCode {
    match err {
        DocumentError::DocumentNotOpen(_) | DocumentError::Grid(GridError::NotFound(_)) => StatusCode::NOT_FOUND,
        DocumentError::Grid(GridError::CollisionRejected(_) | GridError::PlacementExhausted { .. }) => {
            StatusCode::CONFLICT
        }
        DocumentError::Grid(GridError::OutOfBounds(_) | GridError::InvalidSpan { .. }) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        DocumentError::Grid(GridError::InvalidConfig { .. }) => StatusCode::BAD_REQUEST,
    }
}

impl IntoResponse for DocumentError {
    fn into_response(self) -> Response {
        (document_error_to_status(&self), Json(ErrorBody::from_error(&self))).into_response()
    }
}

// =============================================================================
// DOCUMENTS
// =============================================================================

/// `POST /api/documents`
pub async fn open_document(State(state): State<AppState>) -> (StatusCode, Json<OpenedDocument>) {
    let id = document::open_document(&state).await;
    (StatusCode::CREATED, Json(OpenedDocument { id }))
}

/// `GET /api/documents`
pub async fn list_documents(State(state): State<AppState>) -> Json<Vec<Uuid>> {
    Json(document::list_documents(&state).await)
}

/// `GET /api/documents/{id}`
pub async fn get_document(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<Snapshot>, DocumentError> {
    Ok(Json(document::snapshot(&state, id).await?))
}

/// `DELETE /api/documents/{id}`
pub async fn close_document(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode, DocumentError> {
    document::close_document(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// BLOCKS
// =============================================================================

/// `POST /api/documents/{id}/blocks`
pub async fn add_block(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<AddBlockBody>,
) -> Result<(StatusCode, Json<Block>), DocumentError> {
    let block = document::add_block(&state, id, body.kind, body.span, body.content).await?;
    Ok((StatusCode::CREATED, Json(block)))
}

/// `DELETE /api/documents/{id}/blocks/{block_id}`
pub async fn remove_block(
    State(state): State<AppState>,
    Path((id, block_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Removed>, DocumentError> {
    let removed = document::remove_block(&state, id, block_id).await?;
    Ok(Json(Removed { removed }))
}

/// `POST /api/documents/{id}/blocks/{block_id}/move`
pub async fn move_block(
    State(state): State<AppState>,
    Path((id, block_id)): Path<(Uuid, Uuid)>,
    Json(body): Json<MoveBody>,
) -> Result<Json<Layout>, DocumentError> {
    let layout = document::move_block(&state, id, block_id, body.col_start, body.row_start).await?;
    Ok(Json(layout))
}

/// `POST /api/documents/{id}/blocks/{block_id}/resize`
pub async fn resize_block(
    State(state): State<AppState>,
    Path((id, block_id)): Path<(Uuid, Uuid)>,
    Json(body): Json<ResizeBody>,
) -> Result<Json<LayoutChange>, DocumentError> {
    let delta = GridDelta::new(body.col_change, body.row_change);
    let change = document::resize_block(&state, id, block_id, body.direction, delta).await?;
    Ok(Json(change))
}

/// `PATCH /api/documents/{id}/blocks/{block_id}`
pub async fn update_block(
    State(state): State<AppState>,
    Path((id, block_id)): Path<(Uuid, Uuid)>,
    Json(patch): Json<BlockPatch>,
) -> Result<Json<Block>, DocumentError> {
    Ok(Json(document::update_block(&state, id, block_id, patch).await?))
}

/// `POST /api/documents/{id}/blocks/{block_id}/reorder`
pub async fn reorder_block(
    State(state): State<AppState>,
    Path((id, block_id)): Path<(Uuid, Uuid)>,
    Json(body): Json<ReorderBody>,
) -> Result<Json<Reordered>, DocumentError> {
    let swapped = document::reorder_block(&state, id, block_id, body.direction).await?;
    Ok(Json(Reordered { swapped }))
}

// =============================================================================
// SELECTION / CANVAS / COMMANDS
// =============================================================================

/// `GET /api/documents/{id}/selection`
pub async fn get_selection(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<Selection>, DocumentError> {
    Ok(Json(document::selection(&state, id).await?))
}

/// `PUT /api/documents/{id}/selection`
pub async fn set_selection(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(target): Json<Selection>,
) -> Result<Json<Selection>, DocumentError> {
    Ok(Json(document::set_selection(&state, id, target).await?))
}

/// `PATCH /api/documents/{id}/canvas`
pub async fn update_canvas(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<StylePatch>,
) -> Result<Json<BlockStyle>, DocumentError> {
    Ok(Json(document::set_canvas_style(&state, id, patch).await?))
}

/// `POST /api/documents/{id}/commands`
pub async fn apply_command(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(command): Json<Command>,
) -> Result<Json<Applied>, DocumentError> {
    Ok(Json(document::apply_command(&state, id, command).await?))
}
