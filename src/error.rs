//! Error types for scene-announcer

use thiserror::Error;

/// Failures surfaced by the crate.
///
/// Cycles themselves never fail; only loading a settings snapshot can.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Settings parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
