//! Typed commands accepted by [`crate::engine::GridModel::apply`] and the
//! outcomes they produce.
//!
//! Commands are plain values so any transport (HTTP body, websocket frame,
//! in-process call) can build them. Spans are validated at deserialization;
//! block ids are validated by the model.

#[cfg(test)]
#[path = "command_test.rs"]
mod command_test;

use serde::{Deserialize, Serialize};

use crate::doc::{BlockId, StylePatch};
use crate::layout::{Layout, Span};
use crate::resize::{GridDelta, ResizeDirection};
use crate::selection::Selection;

/// Direction for a paint-order swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReorderDirection {
    /// Toward the start of the list (painted earlier).
    Up,
    /// Toward the end of the list (painted later).
    Down,
}

/// A single state transition request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    AddBlock {
        kind: String,
        span: Span,
        #[serde(default)]
        content: String,
    },
    RemoveBlock {
        id: BlockId,
    },
    /// Move to a proposed origin. Out-of-range values are clamped.
    MoveBlock {
        id: BlockId,
        col_start: i64,
        row_start: i64,
    },
    ResizeBlock {
        id: BlockId,
        direction: ResizeDirection,
        col_change: i32,
        row_change: i32,
    },
    Select {
        target: Selection,
    },
    SetContent {
        id: BlockId,
        value: String,
    },
    SetStyle {
        id: BlockId,
        patch: StylePatch,
    },
    SetCanvasStyle {
        patch: StylePatch,
    },
    /// Absolute layout edit, as typed into an inspector.
    SetLayout {
        id: BlockId,
        layout: Layout,
    },
    ReorderBlock {
        id: BlockId,
        direction: ReorderDirection,
    },
}

impl Command {
    /// A resize command carrying `delta`.
    #[must_use]
    pub fn resize(id: BlockId, direction: ResizeDirection, delta: GridDelta) -> Self {
        Self::ResizeBlock { id, direction, col_change: delta.col_change, row_change: delta.row_change }
    }

    /// The block this command targets, if any.
    #[must_use]
    pub fn block_id(&self) -> Option<BlockId> {
        match self {
            Self::RemoveBlock { id }
            | Self::MoveBlock { id, .. }
            | Self::ResizeBlock { id, .. }
            | Self::SetContent { id, .. }
            | Self::SetStyle { id, .. }
            | Self::SetLayout { id, .. }
            | Self::ReorderBlock { id, .. } => Some(*id),
            Self::Select { target } => target.block_id(),
            Self::AddBlock { .. } | Self::SetCanvasStyle { .. } => None,
        }
    }

    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddBlock { .. } => "add_block",
            Self::RemoveBlock { .. } => "remove_block",
            Self::MoveBlock { .. } => "move_block",
            Self::ResizeBlock { .. } => "resize_block",
            Self::Select { .. } => "select",
            Self::SetContent { .. } => "set_content",
            Self::SetStyle { .. } => "set_style",
            Self::SetCanvasStyle { .. } => "set_canvas_style",
            Self::SetLayout { .. } => "set_layout",
            Self::ReorderBlock { .. } => "reorder_block",
        }
    }
}

/// Result of a geometry edit that may turn out to be a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LayoutChange {
    /// The new layout was committed.
    Resized { layout: Layout },
    /// The computed layout equals the current one; nothing was committed.
    Unchanged,
}

/// Successful outcome of [`Command`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Applied {
    Added { id: BlockId, layout: Layout },
    /// `removed` is false when the id was unknown.
    Removed { removed: bool },
    Moved { layout: Layout },
    Resized { layout: Layout },
    Unchanged,
    Selected { selection: Selection },
    Updated,
    /// `swapped` is false at either end of the paint order.
    Reordered { swapped: bool },
}

impl From<LayoutChange> for Applied {
    fn from(change: LayoutChange) -> Self {
        match change {
            LayoutChange::Resized { layout } => Self::Resized { layout },
            LayoutChange::Unchanged => Self::Unchanged,
        }
    }
}
