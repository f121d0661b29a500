//! Auto-placement for newly created blocks.
//!
//! The search is a deterministic row-major first fit: rows ascend from 1,
//! and within each row columns ascend from 1. The first origin whose
//! rectangle overlaps nothing already on the grid wins. Callers rely on the
//! exact origin chosen, so any faster search must return the same cell.

#[cfg(test)]
#[path = "placement_test.rs"]
mod placement_test;

use crate::layout::{GridConfig, Layout, Origin, Span, overlaps};

/// Result of an auto-placement search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// A free origin for the requested span.
    Placed(Origin),
    /// No origin on the grid can hold the span.
    Exhausted,
}

/// Find the first free origin for a block of `span` among `occupied`.
#[must_use]
pub fn place(config: GridConfig, span: Span, occupied: &[Layout]) -> Placement {
    let last_col = config.max_col_start(span.col_span());
    let last_row = config.max_row_start(span.row_span());

    for row_start in 1..=last_row {
        for col_start in 1..=last_col {
            let origin = Origin::new(col_start, row_start);
            if is_free(&Layout::at(origin, span), occupied) {
                return Placement::Placed(origin);
            }
        }
    }
    Placement::Exhausted
}

/// Whether `candidate` overlaps none of `occupied`.
#[must_use]
pub fn is_free(candidate: &Layout, occupied: &[Layout]) -> bool {
    !occupied.iter().any(|other| overlaps(candidate, other))
}
