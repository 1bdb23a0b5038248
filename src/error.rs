//! Error types for the NBA betting database setup

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SetupError>;

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid foreign key mode: {value} (expected `enforced` or `advisory`)")]
    InvalidForeignKeyMode { value: String },

    #[error("Database verification failed for {path}")]
    VerificationFailed { path: String },
}
