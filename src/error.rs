//! Error types
//!
//! The scaler and normalizer are total; errors only arise at the tool and
//! CLI boundaries where raw strings and files come in.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FitTrackError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown {kind} unit: '{value}'")]
    UnknownUnit { kind: &'static str, value: String },
}

impl FitTrackError {
    /// Whether the error was caused by caller input rather than the runtime
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, FitTrackError::Json(_) | FitTrackError::UnknownUnit { .. })
    }
}

pub type Result<T> = std::result::Result<T, FitTrackError>;
