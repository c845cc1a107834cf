use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Tracking file errors
#[derive(Error, Debug)]
pub enum TrackingError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Tracking file is not a JSON object: {0}")]
    NotAnObject(PathBuf),
}

impl TrackingError {
    /// True when the tracking file simply does not exist yet
    pub fn is_not_found(&self) -> bool {
        matches!(self, TrackingError::Io(e) if e.kind() == io::ErrorKind::NotFound)
    }
}

pub type TrackingResult<T> = Result<T, TrackingError>;
