use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;

use futures_util::Stream;
use reqwest::Url;
use tokio::sync::{OwnedSemaphorePermit, Semaphore, mpsc};
use tokio::time::{Instant, sleep_until};
use tracing::{debug, warn};

use crate::error::HttpError;
use crate::input::TestCase;

use super::{AttackOutcome, RatePlan, Transport};

/// Runs one fixed-duration, fixed-rate attack per call.
#[derive(Clone)]
pub struct Attacker {
    transport: Arc<dyn Transport>,
    interval: Duration,
    duration: Duration,
}

impl Attacker {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, interval: Duration, duration: Duration) -> Self {
        Self {
            transport,
            interval,
            duration,
        }
    }

    /// Starts an attack of `target?query` and returns its outcome stream.
    ///
    /// Must be called from within a Tokio runtime. Individual request
    /// failures never fail the attack; they show up as unsuccessful
    /// outcomes.
    ///
    /// # Errors
    ///
    /// Returns an error when the target URL cannot be built.
    pub fn attack(&self, target: &str, test_case: &TestCase) -> Result<AttackStream, HttpError> {
        let url = Arc::new(build_target_url(target, test_case.query())?);
        let plan = RatePlan::new(test_case.concurrency(), self.interval, self.duration);
        debug!(
            "Attacking {} with {} hits over {:?} ({} workers)",
            url,
            plan.hits(),
            plan.duration(),
            plan.workers()
        );

        let (outcome_tx, outcome_rx) = mpsc::channel(plan.workers());
        tokio::spawn(run_pacer(
            Arc::clone(&self.transport),
            url,
            plan,
            outcome_tx,
        ));
        Ok(AttackStream { outcome_rx })
    }
}

/// Outcomes of one attack in completion order. Ends once the attack window
/// has elapsed and every in-flight request has resolved.
pub struct AttackStream {
    outcome_rx: mpsc::Receiver<AttackOutcome>,
}

impl Stream for AttackStream {
    type Item = AttackOutcome;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.outcome_rx.poll_recv(cx)
    }
}

/// Joins `target` and `query` as `target?query`.
///
/// # Errors
///
/// Returns an error for an unparsable URL or a scheme other than http/https.
pub fn build_target_url(target: &str, query: &str) -> Result<Url, HttpError> {
    let raw = format!("{}?{}", target, query);
    let url = Url::parse(&raw).map_err(|err| HttpError::InvalidUrl {
        url: raw.clone(),
        source: err,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(HttpError::UnsupportedScheme {
            url: raw,
            scheme: other.to_owned(),
        }),
    }
}

async fn run_pacer(
    transport: Arc<dyn Transport>,
    url: Arc<Url>,
    plan: RatePlan,
    outcome_tx: mpsc::Sender<AttackOutcome>,
) {
    let slots = Arc::new(Semaphore::new(plan.workers()));
    let start = Instant::now();
    let deadline = start.checked_add(plan.duration()).unwrap_or(start);
    let hits = plan.hits();
    let mut dispatched: u64 = 0;

    for hit in 0..hits {
        let Some(at) = start.checked_add(plan.offset(hit)) else {
            break;
        };
        if at >= deadline {
            break;
        }
        sleep_until(at).await;

        let Some(permit) = acquire_before(&slots, deadline).await else {
            warn!(
                "All {} workers busy until the deadline; skipped {} of {} hits",
                plan.workers(),
                hits.saturating_sub(hit),
                hits
            );
            break;
        };
        if Instant::now() >= deadline {
            break;
        }

        dispatched = dispatched.saturating_add(1);
        tokio::spawn(fire(
            Arc::clone(&transport),
            Arc::clone(&url),
            dispatched,
            permit,
            outcome_tx.clone(),
        ));
    }

    sleep_until(deadline).await;
    debug!("Dispatched {} of {} hits to {}", dispatched, hits, url);
}

async fn acquire_before(slots: &Arc<Semaphore>, deadline: Instant) -> Option<OwnedSemaphorePermit> {
    tokio::select! {
        permit = Arc::clone(slots).acquire_owned() => permit.ok(),
        () = sleep_until(deadline) => None,
    }
}

async fn fire(
    transport: Arc<dyn Transport>,
    url: Arc<Url>,
    sequence_index: u64,
    permit: OwnedSemaphorePermit,
    outcome_tx: mpsc::Sender<AttackOutcome>,
) {
    let dispatched_at = Instant::now();
    let result = transport.get(&url).await;
    let latency = dispatched_at.elapsed();
    drop(permit);

    let outcome = match result {
        Ok(response) => AttackOutcome::response(
            sequence_index,
            dispatched_at,
            latency,
            response.status,
            response.body,
        ),
        Err(failure) => {
            debug!("Request {} to {} failed: {}", sequence_index, url, failure);
            AttackOutcome::failed(sequence_index, dispatched_at, latency, failure)
        }
    };
    if outcome_tx.send(outcome).await.is_err() {
        debug!("Outcome receiver dropped before request {} finished", sequence_index);
    }
}
