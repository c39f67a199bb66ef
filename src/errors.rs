//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Session
    // ---------------------------
    #[error("No active session: pass --user <id>, set CARBONLOG_USER or add `user` to the configuration")]
    NoSession,

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid usage value for {field}: {value}")]
    InvalidUsage { field: &'static str, value: String },

    #[error("Invalid calculation id: {0}")]
    InvalidId(String),

    #[error("Invalid list position: {0}")]
    InvalidPosition(usize),

    // ---------------------------
    // Persistence collaborator failures
    // ---------------------------
    #[error("Failed to save calculation. Please try again.")]
    Save(String),

    #[error("Failed to load calculation history.")]
    HistoryLoad(String),

    #[error("Failed to delete calculation.")]
    Delete(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    #[error("Configuration format error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Underlying cause for the collaborator failures whose display text is
    /// a generic, user-facing message.
    pub fn detail(&self) -> Option<&str> {
        match self {
            AppError::Save(d) | AppError::HistoryLoad(d) | AppError::Delete(d) => Some(d),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
