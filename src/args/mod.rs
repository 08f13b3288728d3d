//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;


pub use cli::{Cli, Command, MeasureArgs};
pub use types::PositiveUsize;

pub(crate) use defaults::{
    DEFAULT_CONFIG_FILES, DEFAULT_DURATION, DEFAULT_INTERVAL, DEFAULT_OUTPUT_PATH,
    DEFAULT_REQUEST_TIMEOUT, DEFAULT_USER_AGENT,
};
