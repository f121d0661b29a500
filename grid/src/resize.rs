//! Eight-handle resize rules.
//!
//! A handle drag produces a signed grid delta. Right and bottom handles grow
//! the span by the delta; left and top handles move the start by the delta
//! and shrink the span by the same amount, keeping the opposite edge fixed.
//! Spans never drop below one cell. Corner handles apply both axes.

#[cfg(test)]
#[path = "resize_test.rs"]
mod resize_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::layout::{GridConfig, Layout};

/// Which handle of a block is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeDirection {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeDirection {
    /// Every handle, edges first.
    pub const ALL: [Self; 8] = [
        Self::Top,
        Self::Bottom,
        Self::Left,
        Self::Right,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    #[must_use]
    pub fn moves_top(self) -> bool {
        matches!(self, Self::Top | Self::TopLeft | Self::TopRight)
    }

    #[must_use]
    pub fn moves_bottom(self) -> bool {
        matches!(self, Self::Bottom | Self::BottomLeft | Self::BottomRight)
    }

    #[must_use]
    pub fn moves_left(self) -> bool {
        matches!(self, Self::Left | Self::TopLeft | Self::BottomLeft)
    }

    #[must_use]
    pub fn moves_right(self) -> bool {
        matches!(self, Self::Right | Self::TopRight | Self::BottomRight)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for ResizeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown handle name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown resize direction: {0}")]
pub struct UnknownDirection(pub String);

impl FromStr for ResizeDirection {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|dir| dir.as_str() == s)
            .ok_or_else(|| UnknownDirection(s.to_owned()))
    }
}

/// Signed change in grid cells along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GridDelta {
    pub col_change: i32,
    pub row_change: i32,
}

impl GridDelta {
    #[must_use]
    pub fn new(col_change: i32, row_change: i32) -> Self {
        Self { col_change, row_change }
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.col_change == 0 && self.row_change == 0
    }
}

/// Apply a handle drag to `layout`.
///
/// Returns `None` when the resulting rectangle would leave the grid.
#[must_use]
pub fn resize_layout(config: GridConfig, layout: &Layout, direction: ResizeDirection, delta: GridDelta) -> Option<Layout> {
    let (col_start, col_span) = resize_axis(
        layout.col_start,
        layout.col_span,
        delta.col_change,
        direction.moves_left(),
        direction.moves_right(),
    );
    let (row_start, row_span) = resize_axis(
        layout.row_start,
        layout.row_span,
        delta.row_change,
        direction.moves_top(),
        direction.moves_bottom(),
    );

    if col_start < 1 || col_start + col_span - 1 > i64::from(config.columns()) {
        return None;
    }
    if row_start < 1 || row_start + row_span - 1 > i64::from(config.max_rows()) {
        return None;
    }

    let (Ok(col_start), Ok(col_span), Ok(row_start), Ok(row_span)) = (
        u32::try_from(col_start),
        u32::try_from(col_span),
        u32::try_from(row_start),
        u32::try_from(row_span),
    ) else {
        return None;
    };
    Some(Layout::new(col_start, col_span, row_start, row_span))
}

/// Resize one axis. `near` is the start edge (left/top), `far` the end edge.
fn resize_axis(start: u32, span: u32, change: i32, near: bool, far: bool) -> (i64, i64) {
    let start = i64::from(start);
    let span = i64::from(span);
    let change = i64::from(change);

    if far {
        (start, (span + change).max(1))
    } else if near {
        (start + change, (span - change).max(1))
    } else {
        (start, span)
    }
}
