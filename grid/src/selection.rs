//! Which block, if any, the user is working on.
//!
//! Selection is host-driven state with one rule the model enforces: removing
//! a block that is selected clears the selection.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use serde::{Deserialize, Serialize};

use crate::doc::BlockId;

/// The active target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Selection {
    #[default]
    None,
    Block {
        id: BlockId,
    },
    Canvas,
}

impl Selection {
    /// The selected block id, if a block is selected.
    #[must_use]
    pub fn block_id(self) -> Option<BlockId> {
        match self {
            Self::Block { id } => Some(id),
            Self::None | Self::Canvas => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    current: Selection,
}

impl SelectionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self) -> Selection {
        self.current
    }

    pub fn select(&mut self, target: Selection) {
        self.current = target;
    }

    pub fn clear(&mut self) {
        self.current = Selection::None;
    }

    /// Clear the selection if it points at `id`. Returns whether it was cleared.
    pub fn on_block_removed(&mut self, id: &BlockId) -> bool {
        if self.current.block_id().as_ref() == Some(id) {
            self.clear();
            return true;
        }
        false
    }
}
