use std::time::Duration;

use crate::args::PositiveUsize;

/// Fixed-rate schedule: `per_interval` requests in every `interval`, for
/// `duration` in total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatePlan {
    per_interval: PositiveUsize,
    interval: Duration,
    duration: Duration,
}

impl RatePlan {
    #[must_use]
    pub const fn new(per_interval: PositiveUsize, interval: Duration, duration: Duration) -> Self {
        Self {
            per_interval,
            interval,
            duration,
        }
    }

    /// Worker pool size; one worker per request of an interval.
    #[must_use]
    pub const fn workers(&self) -> usize {
        self.per_interval.get()
    }

    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of scheduled hits: `ceil(duration * per_interval / interval)`.
    #[must_use]
    pub fn hits(&self) -> u64 {
        let scaled = self
            .duration
            .as_nanos()
            .saturating_mul(self.per_interval_u128());
        saturate_u64(div_ceil_u128(scaled, self.interval_nanos()))
    }

    /// Upper bound on outcomes: `ceil(duration / interval) * per_interval`.
    #[must_use]
    pub fn max_requests(&self) -> u64 {
        let windows = div_ceil_u128(self.duration.as_nanos(), self.interval_nanos());
        saturate_u64(windows.saturating_mul(self.per_interval_u128()))
    }

    /// Offset of `hit` from the attack start. Hits are evenly spaced by
    /// `interval / per_interval`.
    #[must_use]
    pub fn offset(&self, hit: u64) -> Duration {
        let nanos = u128::from(hit)
            .saturating_mul(self.interval_nanos())
            .checked_div(self.per_interval_u128())
            .unwrap_or(0);
        Duration::from_nanos(saturate_u64(nanos))
    }

    fn interval_nanos(&self) -> u128 {
        self.interval.as_nanos().max(1)
    }

    fn per_interval_u128(&self) -> u128 {
        u128::try_from(self.per_interval.get()).unwrap_or(u128::MAX)
    }
}

fn div_ceil_u128(value: u128, divisor: u128) -> u128 {
    if divisor == 0 {
        return 0;
    }
    let quotient = value.checked_div(divisor).unwrap_or(0);
    let remainder = value.checked_rem(divisor).unwrap_or(0);
    if remainder == 0 {
        quotient
    } else {
        quotient.saturating_add(1)
    }
}

fn saturate_u64(value: u128) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}
