//! Test-case loading from the tabular input file.
mod loader;
mod types;


pub use loader::{load_test_cases, parse_test_cases};
pub use types::TestCase;
