//! Shared numeric constants for the grid crate.

// ── Grid ────────────────────────────────────────────────────────

/// Number of columns in a document grid.
pub const DEFAULT_COLUMNS: u32 = 48;

/// Soft ceiling on the number of rows a block may reach.
pub const DEFAULT_MAX_ROWS: u32 = 100;

// ── Pointer ─────────────────────────────────────────────────────

/// Height of one grid row in CSS pixels.
pub const DEFAULT_ROW_HEIGHT_PX: f64 = 20.0;

// ── Style ───────────────────────────────────────────────────────

/// Background color applied to new blocks and the canvas.
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

/// Border color applied to new blocks and the canvas.
pub const DEFAULT_BORDER_COLOR: &str = "#dddddd";

/// Border width in pixels for new blocks.
pub const DEFAULT_BORDER_WIDTH: f64 = 1.0;

/// Border corner radius in pixels for new blocks.
pub const DEFAULT_BORDER_RADIUS: f64 = 4.0;
