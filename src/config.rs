//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use grid::GridError;
use grid::consts::{DEFAULT_COLUMNS, DEFAULT_MAX_ROWS};
use grid::engine::EditPolicy;
use grid::layout::GridConfig;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid grid dimensions: {0}")]
    Grid(#[from] GridError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Grid every newly opened document is created with.
    pub grid: GridConfig,
    pub policy: EditPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, grid: GridConfig::default(), policy: EditPolicy::default() }
    }
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `GRID_COLUMNS`: default 48
    /// - `GRID_MAX_ROWS`: default 100
    /// - `GRID_RESIZE_CHECKS_OVERLAP`: `true` or `false` (default)
    ///
    /// Unparseable values fall back to their default.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Grid` if a grid dimension is zero.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Grid` if a grid dimension is zero.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let columns = env_parse(&lookup, "GRID_COLUMNS", DEFAULT_COLUMNS);
        let max_rows = env_parse(&lookup, "GRID_MAX_ROWS", DEFAULT_MAX_ROWS);
        Ok(Self {
            port: env_parse(&lookup, "PORT", DEFAULT_PORT),
            grid: GridConfig::new(columns, max_rows)?,
            policy: EditPolicy { resize_checks_overlap: env_parse(&lookup, "GRID_RESIZE_CHECKS_OVERLAP", false) },
        })
    }
}

fn env_parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    lookup(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}
