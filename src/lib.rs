//! Core library for the `apibench` CLI.
//!
//! A run reads `(query, concurrency)` test cases from a CSV file, attacks
//! every configured endpoint with each of them at a fixed rate for a fixed
//! duration, prints aggregate latency statistics, and writes the raw
//! per-request responses and latencies to CSV files for later comparison.
pub mod app;
pub mod args;
pub mod config;
pub mod entry;
pub mod error;
pub mod http;
pub mod input;
pub mod logger;
pub mod metrics;
pub mod sinks;
