use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to create output directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to encode CSV row for '{path}': {source}")]
    EncodeCsv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Failed to finish CSV buffer for '{path}': {source}")]
    FlushCsv {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize report for '{path}': {source}")]
    SerializeJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to move '{from}' into place as '{to}': {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
