use thiserror::Error;

use super::{ConfigError, HttpError, InputError, SinkError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Malformed input: {0}")]
    Input(#[from] InputError),
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),
    #[error("Output error: {0}")]
    Sink(#[from] SinkError),
    #[error("No measurement for target #{target}, test case #{case}.")]
    PairOutOfRange { target: usize, case: usize },
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn config<E>(error: E) -> Self
    where
        E: Into<ConfigError>,
    {
        error.into().into()
    }

    pub fn input<E>(error: E) -> Self
    where
        E: Into<InputError>,
    {
        error.into().into()
    }

    pub fn http<E>(error: E) -> Self
    where
        E: Into<HttpError>,
    {
        error.into().into()
    }

    pub fn sink<E>(error: E) -> Self
    where
        E: Into<SinkError>,
    {
        error.into().into()
    }
}
