//! Error taxonomy for grid operations.
//!
//! Every failed operation leaves the model exactly as it was; the error only
//! tells the caller why its request was refused.

use crate::doc::BlockId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// No origin on the grid can hold a block of the requested span.
    #[error("no free cell for a {col_span}x{row_span} block")]
    PlacementExhausted { col_span: u32, row_span: u32 },
    /// The command referenced a block that is not in the model.
    #[error("block not found: {0}")]
    NotFound(BlockId),
    /// The proposed rectangle overlaps another block.
    #[error("block {0} would overlap another block")]
    CollisionRejected(BlockId),
    /// The proposed rectangle leaves the grid.
    #[error("block {0} would leave the grid")]
    OutOfBounds(BlockId),
    /// A span of zero columns or rows.
    #[error("invalid span {col_span}x{row_span}: spans must be at least 1")]
    InvalidSpan { col_span: u32, row_span: u32 },
    /// A grid with zero columns or rows.
    #[error("invalid grid {columns}x{max_rows}: dimensions must be at least 1")]
    InvalidConfig { columns: u32, max_rows: u32 },
}
