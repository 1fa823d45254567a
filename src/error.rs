use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Recent entries not found: {0}")]
    RecentsNotFound(String),

    #[error("Failed to launch {0}: {1}")]
    LaunchError(String, String),

    #[error("No Cursor, Code or VSCodium installation found. Can't find the editor command in /usr/bin, /bin or /snap/bin.")]
    EditorNotFound,
}

pub type Result<T> = std::result::Result<T, CliError>;
