//! Pointer gestures: converting pixel samples into grid commands.
//!
//! The model knows nothing about pixels. A [`GestureController`] sits between
//! the host's pointer events and the model: it remembers where each gesture
//! started, turns the pointer's pixel offset into a grid delta using
//! [`GridMetrics`], and emits one [`Command`] per sample for the host to apply.
//!
//! Every sample is computed from the layout the block had when the gesture
//! began, never from the last committed layout. A drag emits an absolute,
//! clamped move; a resize emits the absolute layout the handle describes. A
//! rejected sample therefore costs nothing, and dragging back to the start
//! restores the starting layout even after a span hit its floor of 1.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::collections::HashMap;

use crate::command::Command;
use crate::consts::DEFAULT_ROW_HEIGHT_PX;
use crate::doc::{Block, BlockId};
use crate::layout::{GridConfig, Layout, Span, clamp_origin};
use crate::resize::{GridDelta, ResizeDirection, resize_layout};

/// A point in host pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pixel size of the rendered grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    /// Width of the grid container in CSS pixels.
    pub container_width_px: f64,
    /// Height of one row in CSS pixels.
    pub row_height_px: f64,
    pub columns: u32,
}

impl GridMetrics {
    #[must_use]
    pub fn new(container_width_px: f64, config: GridConfig) -> Self {
        Self { container_width_px, row_height_px: DEFAULT_ROW_HEIGHT_PX, columns: config.columns() }
    }

    #[must_use]
    pub fn with_row_height(self, row_height_px: f64) -> Self {
        Self { row_height_px, ..self }
    }

    /// Width of one column in CSS pixels.
    #[must_use]
    pub fn cell_width(&self) -> f64 {
        self.container_width_px / f64::from(self.columns.max(1))
    }

    /// Convert a pixel offset to whole grid cells, rounding to nearest.
    #[must_use]
    pub fn to_grid_delta(&self, dx: f64, dy: f64) -> GridDelta {
        GridDelta::new(cells(dx, self.cell_width()), cells(dy, self.row_height_px))
    }
}

#[allow(clippy::cast_possible_truncation)]
fn cells(offset_px: f64, cell_px: f64) -> i32 {
    if !(cell_px.is_finite() && cell_px > 0.0) || !offset_px.is_finite() {
        return 0;
    }
    (offset_px / cell_px).round().clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
}

/// What a gesture does to its block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    /// Move the whole block.
    Drag,
    /// Drag one resize handle.
    Resize(ResizeDirection),
}

/// Opaque reference to an active gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GestureHandle(u64);

#[derive(Debug, Clone)]
struct Gesture {
    block_id: BlockId,
    kind: GestureKind,
    pointer_origin: Point,
    start_layout: Layout,
    /// Cumulative grid delta at the most recent sample.
    latest: GridDelta,
}

/// Tracks in-flight pointer gestures and emits grid commands for them.
#[derive(Debug, Clone)]
pub struct GestureController {
    config: GridConfig,
    metrics: GridMetrics,
    next_handle: u64,
    active: HashMap<GestureHandle, Gesture>,
}

impl GestureController {
    #[must_use]
    pub fn new(config: GridConfig, metrics: GridMetrics) -> Self {
        Self { config, metrics, next_handle: 1, active: HashMap::new() }
    }

    /// Update the pixel metrics, e.g. after the container is resized.
    /// Active gestures keep their origin and pick up the new scale.
    pub fn set_metrics(&mut self, metrics: GridMetrics) {
        self.metrics = metrics;
    }

    #[must_use]
    pub fn metrics(&self) -> GridMetrics {
        self.metrics
    }

    /// Number of gestures not yet ended.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Start a gesture on `block` with the pointer at `pointer_origin`.
    pub fn begin(&mut self, block: &Block, kind: GestureKind, pointer_origin: Point) -> GestureHandle {
        let handle = GestureHandle(self.next_handle);
        self.next_handle += 1;
        self.active.insert(
            handle,
            Gesture {
                block_id: block.id,
                kind,
                pointer_origin,
                start_layout: block.layout,
                latest: GridDelta::default(),
            },
        );
        handle
    }

    /// Feed a pointer sample. Returns the command to apply, or `None` when the
    /// sample does not change the grid position, a resize would leave the
    /// grid, or the handle is unknown.
    pub fn update(&mut self, handle: GestureHandle, pointer: Point) -> Option<Command> {
        let metrics = self.metrics;
        let config = self.config;
        let gesture = self.active.get_mut(&handle)?;

        let delta = metrics.to_grid_delta(pointer.x - gesture.pointer_origin.x, pointer.y - gesture.pointer_origin.y);
        if delta == gesture.latest {
            return None;
        }
        gesture.latest = delta;

        let start = gesture.start_layout;
        match gesture.kind {
            GestureKind::Drag => {
                let Ok(span) = Span::new(start.col_span, start.row_span) else {
                    return None;
                };
                let origin = clamp_origin(
                    config,
                    span,
                    i64::from(start.col_start) + i64::from(delta.col_change),
                    i64::from(start.row_start) + i64::from(delta.row_change),
                );
                Some(Command::MoveBlock {
                    id: gesture.block_id,
                    col_start: i64::from(origin.col_start),
                    row_start: i64::from(origin.row_start),
                })
            }
            GestureKind::Resize(direction) => {
                let layout = resize_layout(config, &start, direction, delta)?;
                Some(Command::SetLayout { id: gesture.block_id, layout })
            }
        }
    }

    /// The block a gesture acts on.
    #[must_use]
    pub fn target(&self, handle: GestureHandle) -> Option<BlockId> {
        self.active.get(&handle).map(|g| g.block_id)
    }

    /// Finish a gesture. Returns false if the handle was not active.
    pub fn end(&mut self, handle: GestureHandle) -> bool {
        self.active.remove(&handle).is_some()
    }

    /// Release every active gesture (pointer cancel, window blur). Committed
    /// samples stay committed. Returns how many gestures were released.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.active.len();
        self.active.clear();
        count
    }

    /// Release gestures on a block that no longer exists.
    pub fn on_block_removed(&mut self, id: &BlockId) {
        self.active.retain(|_, g| &g.block_id != id);
    }
}
