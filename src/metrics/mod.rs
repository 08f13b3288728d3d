//! Streaming aggregation of attack outcomes.
mod aggregator;
mod percentile;
mod types;

#[cfg(test)]
mod tests;

pub use aggregator::Aggregator;
pub use percentile::nearest_rank;
pub use types::Metrics;
