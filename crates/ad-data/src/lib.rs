//! Data loading for the alumni dashboard

pub mod config;
pub mod loader;
pub mod sources;

use thiserror::Error;

// Re-exports
pub use config::{ConfigError, DashboardConfig, SourceConfig};
pub use loader::{load, parse_payload};
pub use sources::{DashboardSource, FileSource, HttpSource};

/// Errors that end the initial load
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid payload: {0}")]
    Parse(#[from] serde_json::Error),
}
