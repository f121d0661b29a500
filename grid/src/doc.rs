//! Document model: blocks, their cosmetic payloads, and the ordered store.
//!
//! A [`Block`] pairs a grid [`Layout`] with a `kind` tag, a [`BlockStyle`] and
//! [`BlockContent`]. The engine reads only the layout; kind, style and content
//! pass through untouched for the host to render. [`BlockStore`] keeps blocks
//! in paint order, which is also the order they are returned to the host.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{DEFAULT_BACKGROUND, DEFAULT_BORDER_COLOR, DEFAULT_BORDER_RADIUS, DEFAULT_BORDER_WIDTH};
use crate::layout::{Layout, overlaps};

/// Unique identifier for a block.
pub type BlockId = Uuid;

/// Border drawn around a block or the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub width: f64,
    pub color: String,
    pub radius: f64,
}

/// Horizontal alignment for text content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Visual attributes of a block or the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockStyle {
    pub background_color: String,
    pub border: Border,
    pub shadow: String,
    pub opacity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Default for BlockStyle {
    fn default() -> Self {
        Self {
            background_color: DEFAULT_BACKGROUND.to_owned(),
            border: Border {
                width: DEFAULT_BORDER_WIDTH,
                color: DEFAULT_BORDER_COLOR.to_owned(),
                radius: DEFAULT_BORDER_RADIUS,
            },
            shadow: "none".to_owned(),
            opacity: 1.0,
            font_family: None,
            font_size: None,
            font_weight: None,
            text_align: None,
            color: None,
        }
    }
}

impl BlockStyle {
    /// Style used for the canvas: white, square, borderless.
    #[must_use]
    pub fn canvas() -> Self {
        Self {
            border: Border { width: 0.0, color: DEFAULT_BORDER_COLOR.to_owned(), radius: 0.0 },
            ..Self::default()
        }
    }

    /// Merge every present field of `patch` into this style.
    pub fn apply(&mut self, patch: &StylePatch) {
        if let Some(ref v) = patch.background_color {
            self.background_color.clone_from(v);
        }
        if let Some(v) = patch.border_width {
            self.border.width = v;
        }
        if let Some(ref v) = patch.border_color {
            self.border.color.clone_from(v);
        }
        if let Some(v) = patch.border_radius {
            self.border.radius = v;
        }
        if let Some(ref v) = patch.shadow {
            self.shadow.clone_from(v);
        }
        if let Some(v) = patch.opacity {
            self.opacity = v.clamp(0.0, 1.0);
        }
        if let Some(ref v) = patch.font_family {
            self.font_family = Some(v.clone());
        }
        if let Some(v) = patch.font_size {
            self.font_size = Some(v);
        }
        if let Some(ref v) = patch.font_weight {
            self.font_weight = Some(v.clone());
        }
        if let Some(v) = patch.text_align {
            self.text_align = Some(v);
        }
        if let Some(ref v) = patch.color {
            self.color = Some(v.clone());
        }
    }
}

/// Sparse style update. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StylePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<String>,
    /// Clamped to `[0, 1]` when applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Text payload of a block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockContent {
    pub value: String,
}

/// A block as stored in the document and on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Unique identifier for this block.
    pub id: BlockId,
    /// Free-form tag chosen by the host (`"text"`, `"image"`, ...).
    pub kind: String,
    /// Position and size on the grid.
    pub layout: Layout,
    pub style: BlockStyle,
    pub content: BlockContent,
}

impl Block {
    /// A block with a fresh id and the default style.
    #[must_use]
    pub fn new(kind: impl Into<String>, layout: Layout, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: kind.into(),
            layout,
            style: BlockStyle::default(),
            content: BlockContent { value: content.into() },
        }
    }
}

/// Ordered store of blocks. Index order is paint order.
#[derive(Debug, Clone, Default)]
pub struct BlockStore {
    blocks: Vec<Block>,
}

impl BlockStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Append a block on top of the paint order.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Remove a block by id, returning it if it was present.
    pub fn remove(&mut self, id: &BlockId) -> Option<Block> {
        let index = self.position(id)?;
        Some(self.blocks.remove(index))
    }

    #[must_use]
    pub fn get(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| &b.id == id)
    }

    pub fn get_mut(&mut self, id: &BlockId) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|b| &b.id == id)
    }

    /// Paint-order index of a block.
    #[must_use]
    pub fn position(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| &b.id == id)
    }

    /// Swap two blocks in paint order. Out-of-range indices are ignored.
    pub fn swap(&mut self, a: usize, b: usize) {
        if a < self.blocks.len() && b < self.blocks.len() {
            self.blocks.swap(a, b);
        }
    }

    /// Layouts of every block.
    #[must_use]
    pub fn layouts(&self) -> Vec<Layout> {
        self.blocks.iter().map(|b| b.layout).collect()
    }

    /// Whether `candidate` overlaps any block other than `id`.
    #[must_use]
    pub fn collides(&self, id: &BlockId, candidate: &Layout) -> bool {
        self.blocks
            .iter()
            .any(|other| &other.id != id && overlaps(candidate, &other.layout))
    }

    /// All blocks in paint order.
    #[must_use]
    pub fn as_slice(&self) -> &[Block] {
        &self.blocks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
