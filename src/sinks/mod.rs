//! Durable outputs: per-request CSV files and the optional JSON report.
mod format;
mod writer;


pub use format::{compact_json, latency_seconds, row_label};
pub use writer::{ResultKind, ResultWriter, write_json};
