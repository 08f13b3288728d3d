use std::time::Duration;

use tokio::time::Instant;

use crate::http::AttackOutcome;

use super::{Metrics, nearest_rank};

const P95: u8 = 95;

/// Running statistics over an outcome stream, fed in arrival order.
#[derive(Debug, Default)]
pub struct Aggregator {
    total_requests: u64,
    successful_requests: u64,
    latency_sum_nanos: u128,
    latency_min: Option<Duration>,
    latency_max: Duration,
    first_dispatch: Option<Instant>,
    last_completion: Option<Instant>,
    latencies: Vec<Duration>,
}

impl Aggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, outcome: &AttackOutcome) {
        self.total_requests = self.total_requests.saturating_add(1);
        if outcome.succeeded {
            self.successful_requests = self.successful_requests.saturating_add(1);
        }

        let latency = outcome.latency;
        self.latency_sum_nanos = self.latency_sum_nanos.saturating_add(latency.as_nanos());
        self.latency_min = Some(self.latency_min.map_or(latency, |min| min.min(latency)));
        self.latency_max = self.latency_max.max(latency);
        self.latencies.push(latency);

        let dispatched = outcome.dispatched_at;
        self.first_dispatch = Some(
            self.first_dispatch
                .map_or(dispatched, |first| first.min(dispatched)),
        );
        let completed = outcome.completed_at();
        self.last_completion = Some(
            self.last_completion
                .map_or(completed, |last| last.max(completed)),
        );
    }

    #[must_use]
    pub const fn total_requests(&self) -> u64 {
        self.total_requests
    }

    /// Finalizes the statistics. An empty aggregator yields all zeros.
    #[must_use]
    pub fn finish(mut self) -> Metrics {
        if self.total_requests == 0 {
            return Metrics::default();
        }
        self.latencies.sort_unstable();

        let mean_nanos = self
            .latency_sum_nanos
            .checked_div(u128::from(self.total_requests))
            .unwrap_or(0);
        let elapsed = match (self.first_dispatch, self.last_completion) {
            (Some(first), Some(last)) => last.saturating_duration_since(first),
            _ => Duration::ZERO,
        };

        Metrics {
            total_requests: self.total_requests,
            successful_requests: self.successful_requests,
            elapsed,
            latency_min: self.latency_min.unwrap_or(Duration::ZERO),
            latency_max: self.latency_max,
            latency_mean: Duration::from_nanos(u64::try_from(mean_nanos).unwrap_or(u64::MAX)),
            latency_p95: nearest_rank(&self.latencies, P95),
        }
    }
}
