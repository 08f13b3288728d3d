//! Run orchestration: loads the test cases once, then measures every
//! (target, test case) pair one after another.
mod orchestrator;
mod report;
pub mod summary;


pub use orchestrator::{Orchestrator, RunState};
pub use report::{PairReport, RunReport};
