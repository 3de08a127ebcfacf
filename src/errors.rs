//! Unified application error type.
//! All modules (store, core, cli, utils) return AppError to keep the error
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
    // Store-related
    // ---------------------------
    #[error("Store error: {0}")]
    Store(#[from] serde_json::Error),

    #[error("Stale write rejected: base revision {base}, store is at {found}")]
    StaleWrite { base: u64, found: u64 },

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Label is empty")]
    EmptyLabel,

    #[error("Label too long: {got} characters (max {max})")]
    LabelTooLong { max: usize, got: usize },

    #[error("No group with id {0}")]
    GroupNotFound(u32),

    #[error("Unknown color '{0}': not a palette entry")]
    UnknownColor(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
