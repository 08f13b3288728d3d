use std::path::PathBuf;
use thiserror::Error;

use super::ValidationError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse TOML config '{path}': {source}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Failed to parse JSON config '{path}': {source}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Unsupported config extension '{ext}'. Use .toml or .json.")]
    UnsupportedExtension { ext: String },
    #[error("Config file must have .toml or .json extension.")]
    MissingExtension,
    #[error("Config '{field}' is invalid: {source}")]
    InvalidField {
        field: &'static str,
        #[source]
        source: ValidationError,
    },
    #[error("Missing input file (set --file-input or provide in config).")]
    MissingInput,
    #[error("Input file '{path}' does not exist.")]
    InputNotFound { path: PathBuf },
    #[error("Input path '{path}' is a folder, not a file.")]
    InputIsDirectory { path: PathBuf },
    #[error("At least one API address is required (set --api or provide in config).")]
    NoTargets,
    #[error("The maximum number of apis allowed is {limit} (got {actual}).")]
    TooManyTargets { limit: usize, actual: usize },
}
