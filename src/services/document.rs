//! Document service: open, close, and edit grid documents.
//!
//! DESIGN
//! ======
//! Every edit takes the document map's write lock, runs one `GridModel`
//! operation, and releases the lock. The model either commits the edit or
//! returns an error with its state untouched, so a rejected request never
//! leaves a document half-edited.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use grid::GridError;
use grid::command::{Applied, Command, LayoutChange, ReorderDirection};
use grid::doc::{Block, BlockStyle, StylePatch};
use grid::engine::{GridModel, Snapshot};
use grid::layout::{Layout, Span};
use grid::resize::{GridDelta, ResizeDirection};
use grid::selection::Selection;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{DocumentError, ErrorCode};
use crate::state::AppState;

// =============================================================================
// TYPES
// =============================================================================

/// Inspector edit of one block. Absent fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BlockPatch {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub style: Option<StylePatch>,
    #[serde(default)]
    pub layout: Option<Layout>,
}

// =============================================================================
// LIFECYCLE
// =============================================================================

/// Open a new, empty document and return its ID.
pub async fn open_document(state: &AppState) -> Uuid {
    let id = Uuid::new_v4();
    let model = state.new_model();
    state.documents.write().await.insert(id, model);
    tracing::info!(document_id = %id, "document opened");
    id
}

/// IDs of every open document, sorted.
pub async fn list_documents(state: &AppState) -> Vec<Uuid> {
    let mut ids: Vec<Uuid> = state.documents.read().await.keys().copied().collect();
    ids.sort_unstable();
    ids
}

/// Close a document, dropping its model.
///
/// # Errors
///
/// Returns `DocumentNotOpen` if no such document is open.
pub async fn close_document(state: &AppState, id: Uuid) -> Result<(), DocumentError> {
    state
        .documents
        .write()
        .await
        .remove(&id)
        .ok_or(DocumentError::DocumentNotOpen(id))?;
    tracing::info!(document_id = %id, "document closed");
    Ok(())
}

/// Full serializable view of a document.
///
/// # Errors
///
/// Returns `DocumentNotOpen` if no such document is open.
pub async fn snapshot(state: &AppState, id: Uuid) -> Result<Snapshot, DocumentError> {
    let documents = state.documents.read().await;
    let model = documents.get(&id).ok_or(DocumentError::DocumentNotOpen(id))?;
    Ok(model.snapshot())
}

// =============================================================================
// EDITS
// =============================================================================

/// Run one model edit under the write lock.
async fn edit<T>(
    state: &AppState,
    id: Uuid,
    op: &'static str,
    f: impl FnOnce(&mut GridModel) -> Result<T, GridError>,
) -> Result<T, DocumentError> {
    let mut documents = state.documents.write().await;
    let model = documents.get_mut(&id).ok_or(DocumentError::DocumentNotOpen(id))?;
    f(model).map_err(|e| {
        tracing::warn!(document_id = %id, op, code = e.error_code(), error = %e, "edit rejected");
        DocumentError::Grid(e)
    })
}

/// Auto-place a new block and return it.
///
/// # Errors
///
/// Returns `DocumentNotOpen` or `PlacementExhausted`.
pub async fn add_block(state: &AppState, id: Uuid, kind: String, span: Span, content: String) -> Result<Block, DocumentError> {
    let block = edit(state, id, "add_block", |model| {
        let block_id = model.add_block(kind, span, content)?;
        model.block(&block_id).cloned().ok_or(GridError::NotFound(block_id))
    })
    .await?;
    tracing::info!(document_id = %id, block_id = %block.id, layout = ?block.layout, "block added");
    Ok(block)
}

/// Remove a block. Returns whether a block was removed.
///
/// # Errors
///
/// Returns `DocumentNotOpen`.
pub async fn remove_block(state: &AppState, id: Uuid, block_id: Uuid) -> Result<bool, DocumentError> {
    let removed = edit(state, id, "remove_block", |model| Ok(model.remove_block(&block_id))).await?;
    if removed {
        tracing::info!(document_id = %id, %block_id, "block removed");
    }
    Ok(removed)
}

/// Move a block to a proposed origin, clamped onto the grid.
///
/// # Errors
///
/// Returns `DocumentNotOpen`, `NotFound`, or `CollisionRejected`.
pub async fn move_block(
    state: &AppState,
    id: Uuid,
    block_id: Uuid,
    col_start: i64,
    row_start: i64,
) -> Result<Layout, DocumentError> {
    let layout = edit(state, id, "move_block", |model| model.move_block(&block_id, col_start, row_start)).await?;
    tracing::debug!(document_id = %id, %block_id, ?layout, "block moved");
    Ok(layout)
}

/// Drag one resize handle by `delta` cells.
///
/// # Errors
///
/// Returns `DocumentNotOpen`, `NotFound`, `OutOfBounds`, or
/// `CollisionRejected` when the policy checks resize overlap.
pub async fn resize_block(
    state: &AppState,
    id: Uuid,
    block_id: Uuid,
    direction: ResizeDirection,
    delta: GridDelta,
) -> Result<LayoutChange, DocumentError> {
    let change = edit(state, id, "resize_block", |model| model.resize_block(&block_id, direction, delta)).await?;
    tracing::debug!(document_id = %id, %block_id, %direction, ?change, "block resized");
    Ok(change)
}

/// Apply an inspector edit and return the updated block.
///
/// The layout is validated first; if it is rejected, content and style are
/// not applied either.
///
/// # Errors
///
/// Returns `DocumentNotOpen`, `NotFound`, `InvalidSpan`, `OutOfBounds`, or
/// `CollisionRejected` when the policy checks overlap.
pub async fn update_block(state: &AppState, id: Uuid, block_id: Uuid, patch: BlockPatch) -> Result<Block, DocumentError> {
    edit(state, id, "update_block", |model| {
        if let Some(layout) = patch.layout {
            model.set_layout(&block_id, layout)?;
        }
        if let Some(value) = patch.content {
            model.set_content(&block_id, value)?;
        }
        if let Some(style) = &patch.style {
            model.set_style(&block_id, style)?;
        }
        model.block(&block_id).cloned().ok_or(GridError::NotFound(block_id))
    })
    .await
}

/// Swap a block with its paint-order neighbour. Returns whether it moved.
///
/// # Errors
///
/// Returns `DocumentNotOpen` or `NotFound`.
pub async fn reorder_block(
    state: &AppState,
    id: Uuid,
    block_id: Uuid,
    direction: ReorderDirection,
) -> Result<bool, DocumentError> {
    edit(state, id, "reorder_block", |model| model.reorder_block(&block_id, direction)).await
}

/// Current selection of a document.
///
/// # Errors
///
/// Returns `DocumentNotOpen`.
pub async fn selection(state: &AppState, id: Uuid) -> Result<Selection, DocumentError> {
    let documents = state.documents.read().await;
    let model = documents.get(&id).ok_or(DocumentError::DocumentNotOpen(id))?;
    Ok(model.selection())
}

/// Replace the selection.
///
/// # Errors
///
/// Returns `DocumentNotOpen`, or `NotFound` when selecting a missing block.
pub async fn set_selection(state: &AppState, id: Uuid, target: Selection) -> Result<Selection, DocumentError> {
    edit(state, id, "select", |model| {
        model.select(target)?;
        Ok(model.selection())
    })
    .await
}

/// Merge a style patch into the canvas style and return the result.
///
/// # Errors
///
/// Returns `DocumentNotOpen`.
pub async fn set_canvas_style(state: &AppState, id: Uuid, patch: StylePatch) -> Result<BlockStyle, DocumentError> {
    edit(state, id, "set_canvas_style", |model| {
        model.set_canvas_style(&patch);
        Ok(model.canvas_style().clone())
    })
    .await
}

/// Apply one typed command.
///
/// # Errors
///
/// Returns `DocumentNotOpen` or the error of the underlying operation.
pub async fn apply_command(state: &AppState, id: Uuid, command: Command) -> Result<Applied, DocumentError> {
    let name = command.name();
    let applied = edit(state, id, name, |model| model.apply(command)).await?;
    match &applied {
        Applied::Added { id: block_id, .. } => tracing::info!(document_id = %id, %block_id, "block added"),
        Applied::Removed { removed: true } => tracing::info!(document_id = %id, "block removed"),
        _ => tracing::debug!(document_id = %id, command = name, outcome = ?applied, "command applied"),
    }
    Ok(applied)
}
