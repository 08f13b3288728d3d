use std::time::Duration;

/// Final statistics for one (target, test case) attack. All fields are zero
/// when no outcome was observed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metrics {
    pub total_requests: u64,
    pub successful_requests: u64,
    /// First dispatch to last completion.
    pub elapsed: Duration,
    pub latency_min: Duration,
    pub latency_max: Duration,
    pub latency_mean: Duration,
    pub latency_p95: Duration,
}

impl Metrics {
    /// Share of successful outcomes, in `[0, 1]`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "ratio is reported as a fraction"
    )]
    pub fn success_ratio(&self) -> f64 {
        if self.total_requests == 0 {
            return 0.0;
        }
        self.successful_requests as f64 / self.total_requests as f64
    }

    /// Observed requests per second over [`Metrics::elapsed`].
    #[must_use]
    pub fn throughput(&self) -> f64 {
        per_second(self.total_requests, self.elapsed)
    }

    /// Successful requests per second over [`Metrics::elapsed`].
    #[must_use]
    pub fn success_throughput(&self) -> f64 {
        per_second(self.successful_requests, self.elapsed)
    }
}

#[expect(clippy::float_arithmetic, reason = "rates are reported as floats")]
fn per_second(count: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if count == 0 || secs <= 0.0 {
        return 0.0;
    }
    count as f64 / secs
}
