//! Configuration loading and resolution into an immutable run configuration.
mod loader;
mod run;
pub mod types;

#[cfg(test)]
mod tests;

pub use loader::load_config;
pub use run::{MAX_TARGETS, RunConfig, validate_input_path};
pub use types::ConfigFile;

pub(crate) use run::check_target_count;
