use super::*;
use crate::http::{AttackOutcome, TransportFailure};
use std::time::Duration;
use tokio::time::Instant;

fn ok_outcome(seq: u64, base: Instant, offset_ms: u64, latency_ms: u64) -> AttackOutcome {
    AttackOutcome::response(
        seq,
        base + Duration::from_millis(offset_ms),
        Duration::from_millis(latency_ms),
        200,
        b"{}".to_vec(),
    )
}

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn empty_stream_yields_zero_metrics() -> Result<(), String> {
    let metrics = Aggregator::new().finish();
    if metrics != Metrics::default() {
        return Err(format!("Expected zeroed metrics, got {:?}", metrics));
    }
    if metrics.success_ratio() > 0.0 || metrics.throughput() > 0.0 {
        return Err("Expected zero ratio and throughput".to_owned());
    }
    Ok(())
}

#[test]
fn aggregates_counts_and_latency_bounds() -> Result<(), String> {
    let base = Instant::now();
    let mut aggregator = Aggregator::new();
    aggregator.add(&ok_outcome(1, base, 0, 30));
    aggregator.add(&ok_outcome(2, base, 20, 10));
    aggregator.add(&AttackOutcome::failed(
        3,
        base + ms(40),
        ms(20),
        TransportFailure::Timeout,
    ));
    aggregator.add(&ok_outcome(4, base, 60, 40));

    if aggregator.total_requests() != 4 {
        return Err(format!("Expected 4 requests, got {}", aggregator.total_requests()));
    }
    let metrics = aggregator.finish();

    if metrics.successful_requests != 3 {
        return Err(format!("Expected 3 successes, got {}", metrics.successful_requests));
    }
    if (metrics.success_ratio() - 0.75).abs() > f64::EPSILON {
        return Err(format!("Unexpected success ratio {}", metrics.success_ratio()));
    }
    if metrics.latency_min != ms(10) || metrics.latency_max != ms(40) {
        return Err(format!("Unexpected bounds {:?}", metrics));
    }
    if metrics.latency_mean != ms(25) {
        return Err(format!("Unexpected mean {:?}", metrics.latency_mean));
    }
    if metrics.latency_p95 != ms(40) {
        return Err(format!("Unexpected p95 {:?}", metrics.latency_p95));
    }
    if metrics.elapsed != ms(100) {
        return Err(format!("Unexpected elapsed {:?}", metrics.elapsed));
    }
    if (metrics.throughput() - 40.0).abs() > 1e-9 {
        return Err(format!("Unexpected throughput {}", metrics.throughput()));
    }
    if (metrics.success_throughput() - 30.0).abs() > 1e-9 {
        return Err(format!(
            "Unexpected success throughput {}",
            metrics.success_throughput()
        ));
    }
    Ok(())
}

#[test]
fn mean_lies_between_bounds() -> Result<(), String> {
    let base = Instant::now();
    let mut aggregator = Aggregator::new();
    for (seq, latency) in [7_u64, 3, 3, 11, 5].into_iter().enumerate() {
        let seq = u64::try_from(seq).unwrap_or(0);
        aggregator.add(&ok_outcome(seq, base, seq, latency));
    }
    let metrics = aggregator.finish();
    if !(metrics.latency_min <= metrics.latency_mean && metrics.latency_mean <= metrics.latency_max)
    {
        return Err(format!("Mean out of bounds: {:?}", metrics));
    }
    let ratio = metrics.success_ratio();
    if !(0.0..=1.0).contains(&ratio) {
        return Err(format!("Ratio out of range: {}", ratio));
    }
    Ok(())
}

#[test]
fn nearest_rank_policy() -> Result<(), String> {
    let sample: Vec<Duration> = (1..=20).map(ms).collect();
    let cases = [(95, ms(19)), (50, ms(10)), (100, ms(20)), (0, ms(1))];
    for (percentile, expected) in cases {
        let value = nearest_rank(&sample, percentile);
        if value != expected {
            return Err(format!("p{} = {:?}, expected {:?}", percentile, value, expected));
        }
    }
    if nearest_rank(&[ms(42)], 95) != ms(42) {
        return Err("Single sample should be its own p95".to_owned());
    }
    if nearest_rank(&[], 95) != Duration::ZERO {
        return Err("Empty sample should yield zero".to_owned());
    }
    Ok(())
}
