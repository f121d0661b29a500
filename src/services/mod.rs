//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the document lifecycle and every model mutation so
//! route handlers can stay focused on request parsing and status mapping.

pub mod document;
