mod app;
mod config;
mod http;
mod input;
mod sink;
mod validation;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use http::HttpError;
pub use input::InputError;
pub use sink::SinkError;
pub use validation::ValidationError;
