//! Grid layout engine for block-composed documents.
//!
//! A document is an ordered list of rectangular blocks placed on a grid that
//! is fixed in width and open (up to a ceiling) in height. This crate owns the
//! geometry: the overlap predicate, first-fit auto-placement, and the bounds
//! and collision rules applied when a block is moved or resized. Everything
//! visual (painting, styling, export) lives in the host and reads the
//! committed state back through [`engine::GridModel::blocks`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::GridModel`], the owned document state and its mutators |
//! | [`layout`] | Grid configuration, block rectangles, overlap and clamp helpers |
//! | [`placement`] | Row-major first-fit search for new blocks |
//! | [`resize`] | Eight-handle resize rules |
//! | [`doc`] | Block, style and content types plus the ordered block store |
//! | [`selection`] | Which block (or the canvas) is active |
//! | [`command`] | Typed commands and their outcomes |
//! | [`input`] | Pointer gesture controller that turns pixel samples into commands |
//! | [`error`] | The [`error::GridError`] taxonomy |
//! | [`consts`] | Shared numeric defaults |

pub mod command;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod error;
pub mod input;
pub mod layout;
pub mod placement;
pub mod resize;
pub mod selection;

pub use error::GridError;
