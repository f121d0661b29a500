//! Grid geometry: configuration, block rectangles, and the pure predicates
//! built on them.
//!
//! Coordinates are 1-based cell indices. A [`Layout`] covers the inclusive
//! cell ranges `[col_start, col_end]` × `[row_start, row_end]`, so two blocks
//! that share a boundary cell overlap while blocks separated by a one-cell gap
//! do not.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_COLUMNS, DEFAULT_MAX_ROWS};
use crate::error::GridError;

/// Dimensions of a document grid. Fixed for the lifetime of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridConfig {
    columns: u32,
    max_rows: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { columns: DEFAULT_COLUMNS, max_rows: DEFAULT_MAX_ROWS }
    }
}

impl GridConfig {
    /// Build a grid of `columns` × `max_rows` cells.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if either dimension is zero.
    pub fn new(columns: u32, max_rows: u32) -> Result<Self, GridError> {
        if columns == 0 || max_rows == 0 {
            return Err(GridError::InvalidConfig { columns, max_rows });
        }
        Ok(Self { columns, max_rows })
    }

    #[must_use]
    pub fn columns(self) -> u32 {
        self.columns
    }

    #[must_use]
    pub fn max_rows(self) -> u32 {
        self.max_rows
    }

    /// Largest `col_start` at which a block `col_span` wide still fits.
    /// Zero when the span is wider than the grid.
    #[must_use]
    pub fn max_col_start(self, col_span: u32) -> u32 {
        (self.columns + 1).saturating_sub(col_span)
    }

    /// Largest `row_start` at which a block `row_span` tall still fits.
    /// Zero when the span is taller than the grid.
    #[must_use]
    pub fn max_row_start(self, row_span: u32) -> u32 {
        (self.max_rows + 1).saturating_sub(row_span)
    }

    /// Whether `layout` has non-zero spans and lies entirely on the grid.
    #[must_use]
    pub fn contains(self, layout: &Layout) -> bool {
        layout.col_span >= 1
            && layout.row_span >= 1
            && layout.col_start >= 1
            && layout.row_start >= 1
            && layout.col_end() <= self.columns
            && layout.row_end() <= self.max_rows
    }
}

/// Width and height of a block in grid cells. Both are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSpan")]
pub struct Span {
    col_span: u32,
    row_span: u32,
}

#[derive(Deserialize)]
struct RawSpan {
    col_span: u32,
    row_span: u32,
}

impl TryFrom<RawSpan> for Span {
    type Error = GridError;

    fn try_from(raw: RawSpan) -> Result<Self, Self::Error> {
        Self::new(raw.col_span, raw.row_span)
    }
}

impl Span {
    /// # Errors
    ///
    /// Returns `InvalidSpan` if either span is zero.
    pub fn new(col_span: u32, row_span: u32) -> Result<Self, GridError> {
        if col_span == 0 || row_span == 0 {
            return Err(GridError::InvalidSpan { col_span, row_span });
        }
        Ok(Self { col_span, row_span })
    }

    #[must_use]
    pub fn col_span(self) -> u32 {
        self.col_span
    }

    #[must_use]
    pub fn row_span(self) -> u32 {
        self.row_span
    }
}

/// Top-left cell of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Origin {
    pub col_start: u32,
    pub row_start: u32,
}

impl Origin {
    #[must_use]
    pub fn new(col_start: u32, row_start: u32) -> Self {
        Self { col_start, row_start }
    }
}

/// Position and size of a block on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub col_start: u32,
    pub col_span: u32,
    pub row_start: u32,
    pub row_span: u32,
}

impl Layout {
    #[must_use]
    pub fn new(col_start: u32, col_span: u32, row_start: u32, row_span: u32) -> Self {
        Self { col_start, col_span, row_start, row_span }
    }

    /// A layout of `span` with its top-left cell at `origin`.
    #[must_use]
    pub fn at(origin: Origin, span: Span) -> Self {
        Self::new(origin.col_start, span.col_span, origin.row_start, span.row_span)
    }

    /// Last column covered (inclusive).
    #[must_use]
    pub fn col_end(&self) -> u32 {
        self.col_start.saturating_add(self.col_span).saturating_sub(1)
    }

    /// Last row covered (inclusive).
    #[must_use]
    pub fn row_end(&self) -> u32 {
        self.row_start.saturating_add(self.row_span).saturating_sub(1)
    }

    #[must_use]
    pub fn origin(&self) -> Origin {
        Origin::new(self.col_start, self.row_start)
    }

    /// The same rectangle moved so its top-left cell is `origin`.
    #[must_use]
    pub fn with_origin(&self, origin: Origin) -> Self {
        Self { col_start: origin.col_start, row_start: origin.row_start, ..*self }
    }
}

/// Whether two rectangles share at least one grid cell.
#[must_use]
pub fn overlaps(a: &Layout, b: &Layout) -> bool {
    let horizontal = a.col_start <= b.col_end() && a.col_end() >= b.col_start;
    let vertical = a.row_start <= b.row_end() && a.row_end() >= b.row_start;
    horizontal && vertical
}

/// Bound a proposed origin so a block of `span` stays on the grid.
///
/// `col_start` is clamped to `[1, columns − col_span + 1]` and `row_start` to
/// `[1, max_rows − row_span + 1]`. Pointer collaborators apply this before
/// issuing a move; the model applies it again on receipt.
#[must_use]
pub fn clamp_origin(config: GridConfig, span: Span, col_start: i64, row_start: i64) -> Origin {
    Origin::new(
        clamp_axis(col_start, config.max_col_start(span.col_span)),
        clamp_axis(row_start, config.max_row_start(span.row_span)),
    )
}

fn clamp_axis(proposed: i64, max_start: u32) -> u32 {
    let upper = max_start.max(1);
    let clamped = proposed.clamp(1, i64::from(upper));
    u32::try_from(clamped).unwrap_or(upper)
}
