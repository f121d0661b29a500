//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the server configuration and a map of open documents. Each
//! document owns one `GridModel`; the map's write lock serializes every
//! mutation, so a model is never edited by two requests at once.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::collections::HashMap;
use std::sync::Arc;

use grid::engine::GridModel;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::ServerConfig;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
    pub documents: Arc<RwLock<HashMap<Uuid, GridModel>>>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self { config, documents: Arc::new(RwLock::new(HashMap::new())) }
    }

    /// A fresh, empty model built from the configured grid and policy.
    #[must_use]
    pub fn new_model(&self) -> GridModel {
        GridModel::with_policy(self.config.grid, self.config.policy)
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
