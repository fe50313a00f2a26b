//! Unified application error type.
//! All modules (data, core, ui, cli) return AppError to keep the error
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
    // CSV ingestion
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown city: {0}")]
    UnknownCity(String),

    #[error("Malformed start timestamp at line {line}: {value}")]
    MalformedTimestamp { line: usize, value: String },

    // ---------------------------
    // Aggregation errors
    // ---------------------------
    #[error("No trips in the filtered dataset")]
    EmptyDataset,
}

pub type AppResult<T> = Result<T, AppError>;
