use std::io::IsTerminal;

use crossterm::style::Stylize;

use crate::input::TestCase;
use crate::metrics::Metrics;

/// Prints the console summary for one finished pair.
pub fn print_summary(target: &str, test_case: &TestCase, metrics: &Metrics, no_color: bool) {
    let header = summary_header(target, test_case);
    if !no_color && std::io::stdout().is_terminal() {
        println!("{}", header.bold().cyan());
    } else {
        println!("{header}");
    }
    for line in summary_lines(metrics) {
        println!("{line}");
    }
}

pub(crate) fn summary_header(target: &str, test_case: &TestCase) -> String {
    format!(
        "Result for query: {}, concurrency: {} ({})",
        test_case.query(),
        test_case.concurrency(),
        target
    )
}

/// Success rate, request count, throughput, then latency min/max/mean/P95.
#[expect(
    clippy::float_arithmetic,
    reason = "success ratio is shown as a percentage"
)]
pub(crate) fn summary_lines(metrics: &Metrics) -> Vec<String> {
    vec![
        format!("Success: {:.2}%", metrics.success_ratio() * 100.0),
        format!("Total requests: {}", metrics.total_requests),
        format!("Throughput: {:.2} req/s", metrics.throughput()),
        format!(
            "Success request per second: {:.2}",
            metrics.success_throughput()
        ),
        format!("Latency min: {:?}", metrics.latency_min),
        format!("Latency max: {:?}", metrics.latency_max),
        format!("Latency mean: {:?}", metrics.latency_mean),
        format!("Latency P95: {:?}", metrics.latency_p95),
    ]
}
