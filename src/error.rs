//! Error types for the KBO power ranking pipeline

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PowerError>;


#[derive(Error, Debug)]
pub enum PowerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read dataset {}: {source}", .path.display())]
    DatasetRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse dataset {}: {source}", .path.display())]
    DatasetParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid {dataset} record at index {index}: {reason}")]
    InvalidRecord {
        dataset: String,
        index: usize,
        reason: String,
    },

    #[error("Data directory not provided and {env_var} environment variable is empty")]
    MissingDataDir { env_var: String },

    #[error("Failed to parse year: {0}")]
    InvalidYear(#[from] std::num::ParseIntError),

    #[error("Invalid year range: {from} is after {to}")]
    InvalidYearRange { from: u16, to: u16 },

    #[error("Not found: {what}")]
    NotFound { what: String },
}
