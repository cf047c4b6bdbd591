use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoodZoneError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Content Validation Error: {0}")]
    Validation(String),

    #[error("Malformed record at line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

impl MoodZoneError {
    /// Content errors may be retried by re-running the whole pipeline over
    /// freshly read files. A missing file or raw IO failure aborts instead.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            MoodZoneError::Csv(_)
                | MoodZoneError::Validation(_)
                | MoodZoneError::Malformed { .. }
        )
    }
}

pub type MzResult<T> = Result<T, MoodZoneError>;
