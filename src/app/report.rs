use serde::{Serialize, Serializer};

use crate::input::TestCase;
use crate::metrics::Metrics;

/// Aggregates of a whole run, one entry per pair in execution order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub pairs: Vec<PairReport>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairReport {
    pub target: String,
    pub test_case: TestCase,
    pub metrics: Metrics,
}

impl PairReport {
    #[must_use]
    pub const fn new(target: String, test_case: TestCase, metrics: Metrics) -> Self {
        Self {
            target,
            test_case,
            metrics,
        }
    }
}

#[derive(Serialize)]
struct PairRecord<'report> {
    target: &'report str,
    query: &'report str,
    concurrency: usize,
    total_requests: u64,
    success_ratio: f64,
    throughput: f64,
    success_throughput: f64,
    latency_min_s: f64,
    latency_max_s: f64,
    latency_mean_s: f64,
    latency_p95_s: f64,
}

impl Serialize for PairReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let metrics = &self.metrics;
        PairRecord {
            target: &self.target,
            query: self.test_case.query(),
            concurrency: self.test_case.concurrency().get(),
            total_requests: metrics.total_requests,
            success_ratio: metrics.success_ratio(),
            throughput: metrics.throughput(),
            success_throughput: metrics.success_throughput(),
            latency_min_s: metrics.latency_min.as_secs_f64(),
            latency_max_s: metrics.latency_max.as_secs_f64(),
            latency_mean_s: metrics.latency_mean.as_secs_f64(),
            latency_p95_s: metrics.latency_p95.as_secs_f64(),
        }
        .serialize(serializer)
    }
}
