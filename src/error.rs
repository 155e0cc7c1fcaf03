use std::path::PathBuf;

use thiserror::Error;

/// Errors raised at the edges of the engine: config files, batch inputs, report output.
/// The scoring core itself is total and never returns one of these.
#[derive(Debug, Error)]
pub enum LexiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid profile: {0}")]
    InvalidConfig(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("profile file not found: {}", path.display())]
    ProfileNotFound { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, LexiError>;
