use serde::Serialize;

use crate::command::{Applied, Command, LayoutChange, ReorderDirection};
use crate::doc::{Block, BlockId, BlockStore, BlockStyle, StylePatch};
use crate::error::GridError;
use crate::layout::{GridConfig, Layout, Span, clamp_origin, overlaps};
use crate::placement::{Placement, place};
use crate::resize::{GridDelta, ResizeDirection, resize_layout};
use crate::selection::{Selection, SelectionTracker};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Validation rules that are a policy choice rather than a grid invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditPolicy {
    /// Reject resizes and layout edits that overlap another block. Moves and
    /// placement always check overlap.
    pub resize_checks_overlap: bool,
}

/// Serializable view of a whole document.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub config: GridConfig,
    pub blocks: Vec<Block>,
    pub selection: Selection,
    pub canvas_style: BlockStyle,
}

/// Owned state of one document: its blocks, canvas style and selection.
///
/// Every mutator either commits a legal change or returns an error and leaves
/// the model untouched.
#[derive(Debug, Clone)]
pub struct GridModel {
    config: GridConfig,
    policy: EditPolicy,
    blocks: BlockStore,
    canvas_style: BlockStyle,
    selection: SelectionTracker,
}

impl Default for GridModel {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

impl GridModel {
    #[must_use]
    pub fn new(config: GridConfig) -> Self {
        Self::with_policy(config, EditPolicy::default())
    }

    #[must_use]
    pub fn with_policy(config: GridConfig, policy: EditPolicy) -> Self {
        Self {
            config,
            policy,
            blocks: BlockStore::new(),
            canvas_style: BlockStyle::canvas(),
            selection: SelectionTracker::new(),
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> GridConfig {
        self.config
    }

    #[must_use]
    pub fn policy(&self) -> EditPolicy {
        self.policy
    }

    /// All blocks in paint order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        self.blocks.as_slice()
    }

    /// Look up a block by id.
    #[must_use]
    pub fn block(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.get(id)
    }

    #[must_use]
    pub fn canvas_style(&self) -> &BlockStyle {
        &self.canvas_style
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection.get()
    }

    /// Pairs of blocks whose rectangles overlap, in paint order.
    ///
    /// Always empty unless a resize or layout edit was allowed to overlap.
    #[must_use]
    pub fn overlapping_pairs(&self) -> Vec<(BlockId, BlockId)> {
        let blocks = self.blocks.as_slice();
        let mut pairs = Vec::new();
        for (i, a) in blocks.iter().enumerate() {
            for b in &blocks[i + 1..] {
                if overlaps(&a.layout, &b.layout) {
                    pairs.push((a.id, b.id));
                }
            }
        }
        pairs
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            config: self.config,
            blocks: self.blocks.as_slice().to_vec(),
            selection: self.selection.get(),
            canvas_style: self.canvas_style.clone(),
        }
    }

    // --- Block lifecycle ---

    /// Create a block of `span` at the first free origin.
    ///
    /// # Errors
    ///
    /// Returns `PlacementExhausted` if no origin can hold the span; the
    /// block is not added.
    pub fn add_block(&mut self, kind: impl Into<String>, span: Span, content: impl Into<String>) -> Result<BlockId, GridError> {
        let Placement::Placed(origin) = place(self.config, span, &self.blocks.layouts()) else {
            return Err(GridError::PlacementExhausted { col_span: span.col_span(), row_span: span.row_span() });
        };
        let block = Block::new(kind, Layout::at(origin, span), content);
        let id = block.id;
        self.blocks.push(block);
        Ok(id)
    }

    /// Remove a block. Unknown ids are a no-op. Returns whether a block was
    /// removed.
    pub fn remove_block(&mut self, id: &BlockId) -> bool {
        if self.blocks.remove(id).is_none() {
            return false;
        }
        self.selection.on_block_removed(id);
        true
    }

    // --- Geometry ---

    /// Move a block so its top-left cell is `(col_start, row_start)`.
    ///
    /// The proposal is clamped onto the grid first. The move is rejected if
    /// the block would overlap any other block.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id and `CollisionRejected` on overlap.
    pub fn move_block(&mut self, id: &BlockId, col_start: i64, row_start: i64) -> Result<Layout, GridError> {
        let current = self.layout_of(id)?;
        let span = Span::new(current.col_span, current.row_span)?;
        let candidate = current.with_origin(clamp_origin(self.config, span, col_start, row_start));
        self.commit_if_legal(id, candidate, true)
    }

    /// Drag one of the block's eight handles by `delta` grid cells.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id, `OutOfBounds` if the result
    /// leaves the grid, and `CollisionRejected` on overlap when the policy
    /// asks for it.
    pub fn resize_block(&mut self, id: &BlockId, direction: ResizeDirection, delta: GridDelta) -> Result<LayoutChange, GridError> {
        let current = self.layout_of(id)?;
        let candidate = resize_layout(self.config, &current, direction, delta).ok_or(GridError::OutOfBounds(*id))?;
        self.commit_change(id, current, candidate)
    }

    /// Replace a block's layout outright.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`, `InvalidSpan` for a zero span, `OutOfBounds`, or
    /// `CollisionRejected` when the policy checks overlap.
    pub fn set_layout(&mut self, id: &BlockId, layout: Layout) -> Result<LayoutChange, GridError> {
        let current = self.layout_of(id)?;
        Span::new(layout.col_span, layout.row_span)?;
        self.commit_change(id, current, layout)
    }

    fn commit_change(&mut self, id: &BlockId, current: Layout, candidate: Layout) -> Result<LayoutChange, GridError> {
        if candidate == current {
            return Ok(LayoutChange::Unchanged);
        }
        let layout = self.commit_if_legal(id, candidate, self.policy.resize_checks_overlap)?;
        Ok(LayoutChange::Resized { layout })
    }

    /// The single gate every geometry edit passes through.
    fn commit_if_legal(&mut self, id: &BlockId, candidate: Layout, check_overlap: bool) -> Result<Layout, GridError> {
        if !self.config.contains(&candidate) {
            return Err(GridError::OutOfBounds(*id));
        }
        if check_overlap && self.blocks.collides(id, &candidate) {
            return Err(GridError::CollisionRejected(*id));
        }
        let block = self.blocks.get_mut(id).ok_or(GridError::NotFound(*id))?;
        block.layout = candidate;
        Ok(candidate)
    }

    fn layout_of(&self, id: &BlockId) -> Result<Layout, GridError> {
        self.blocks
            .get(id)
            .map(|b| b.layout)
            .ok_or(GridError::NotFound(*id))
    }

    // --- Selection ---

    /// Set the selection.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when selecting a block that does not exist.
    pub fn select(&mut self, target: Selection) -> Result<(), GridError> {
        if let Selection::Block { id } = target {
            if self.blocks.get(&id).is_none() {
                return Err(GridError::NotFound(id));
            }
        }
        self.selection.select(target);
        Ok(())
    }

    // --- Inspector edits ---

    /// Replace a block's text content.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id.
    pub fn set_content(&mut self, id: &BlockId, value: impl Into<String>) -> Result<(), GridError> {
        let block = self.blocks.get_mut(id).ok_or(GridError::NotFound(*id))?;
        block.content.value = value.into();
        Ok(())
    }

    /// Merge a style patch into a block's style.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id.
    pub fn set_style(&mut self, id: &BlockId, patch: &StylePatch) -> Result<(), GridError> {
        let block = self.blocks.get_mut(id).ok_or(GridError::NotFound(*id))?;
        block.style.apply(patch);
        Ok(())
    }

    /// Merge a style patch into the canvas style.
    pub fn set_canvas_style(&mut self, patch: &StylePatch) {
        self.canvas_style.apply(patch);
    }

    /// Swap a block with its neighbour in paint order. Returns false when the
    /// block is already at that end.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id.
    pub fn reorder_block(&mut self, id: &BlockId, direction: ReorderDirection) -> Result<bool, GridError> {
        let index = self.blocks.position(id).ok_or(GridError::NotFound(*id))?;
        let target = match direction {
            ReorderDirection::Up if index > 0 => index - 1,
            ReorderDirection::Down if index + 1 < self.blocks.len() => index + 1,
            ReorderDirection::Up | ReorderDirection::Down => return Ok(false),
        };
        self.blocks.swap(index, target);
        Ok(true)
    }

    // --- Commands ---

    /// Apply one command.
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying operation.
    pub fn apply(&mut self, command: Command) -> Result<Applied, GridError> {
        match command {
            Command::AddBlock { kind, span, content } => {
                let id = self.add_block(kind, span, content)?;
                let layout = self.layout_of(&id)?;
                Ok(Applied::Added { id, layout })
            }
            Command::RemoveBlock { id } => Ok(Applied::Removed { removed: self.remove_block(&id) }),
            Command::MoveBlock { id, col_start, row_start } => {
                let layout = self.move_block(&id, col_start, row_start)?;
                Ok(Applied::Moved { layout })
            }
            Command::ResizeBlock { id, direction, col_change, row_change } => {
                Ok(self.resize_block(&id, direction, GridDelta::new(col_change, row_change))?.into())
            }
            Command::Select { target } => {
                self.select(target)?;
                Ok(Applied::Selected { selection: target })
            }
            Command::SetContent { id, value } => {
                self.set_content(&id, value)?;
                Ok(Applied::Updated)
            }
            Command::SetStyle { id, patch } => {
                self.set_style(&id, &patch)?;
                Ok(Applied::Updated)
            }
            Command::SetCanvasStyle { patch } => {
                self.set_canvas_style(&patch);
                Ok(Applied::Updated)
            }
            Command::SetLayout { id, layout } => Ok(self.set_layout(&id, layout)?.into()),
            Command::ReorderBlock { id, direction } => {
                let swapped = self.reorder_block(&id, direction)?;
                Ok(Applied::Reordered { swapped })
            }
        }
    }
}
