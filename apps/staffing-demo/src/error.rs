//! # App Error Type
//!
//! Everything that can stop the demo before it finishes. Declines from the
//! roster or calculator are not here: they are part of the walkthrough.

use thiserror::Error;

use crate::config::ConfigError;
use staffing_core::CoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid boss name or capacity from configuration.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to encode report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
