use std::time::Duration;

/// Divisor for whole-number percentiles.
const PERCENT_DIVISOR: u128 = 100;
/// Added before division so the rank rounds up.
const RANK_CEIL_OFFSET: u128 = 99;

/// Nearest-rank percentile of an ascending sample: the value at 1-based
/// rank `ceil(percentile / 100 * n)`, clamped to `1..=n`. Returns zero for
/// an empty sample.
#[must_use]
pub fn nearest_rank(sorted: &[Duration], percentile: u8) -> Duration {
    if sorted.is_empty() {
        return Duration::ZERO;
    }
    let count = u128::try_from(sorted.len()).unwrap_or(u128::MAX);
    let rank = u128::from(percentile.min(100))
        .saturating_mul(count)
        .saturating_add(RANK_CEIL_OFFSET)
        .checked_div(PERCENT_DIVISOR)
        .unwrap_or(0)
        .max(1);
    let idx = usize::try_from(rank.saturating_sub(1)).unwrap_or(usize::MAX);
    sorted
        .get(idx)
        .or_else(|| sorted.last())
        .copied()
        .unwrap_or(Duration::ZERO)
}
