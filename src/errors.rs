//! Unified application error type.
//! All modules (core, cli, config, utils) return AppError to keep the error
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
    // Filter / query errors
    // ---------------------------
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Unknown entity: {0}")]
    UnknownEntity(String),

    #[error("Invalid filter mode: {0}")]
    InvalidMode(String),

    #[error("Invalid selection status: {0}")]
    InvalidSelectionStatus(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
