use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON write error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("recognizer failed: {0}")]
    Recognizer(String),

    #[error("invalid option: {0}")]
    InvalidOption(String),
}
