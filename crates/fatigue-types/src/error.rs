// ─────────────────────────────────────────────────────────────────────
// Fatigue Crack Growth Core — Error
// License: MIT
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FatigueError {
    #[error("Invalid parameter `{name}`: {message}")]
    InvalidParameter { name: &'static str, message: String },

    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type FatigueResult<T> = Result<T, FatigueError>;
