use std::path::PathBuf;
use thiserror::Error;

use super::ValidationError;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to open input '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Row {row}: unreadable record: {source}")]
    Record {
        row: usize,
        #[source]
        source: csv::Error,
    },
    #[error("Row {row}: expected 2 fields (query, concurrency), found {found}.")]
    FieldCount { row: usize, found: usize },
    #[error("Row {row}: invalid concurrency '{value}': {source}")]
    InvalidConcurrency {
        row: usize,
        value: String,
        #[source]
        source: ValidationError,
    },
}
