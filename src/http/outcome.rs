use std::time::Duration;

use tokio::time::Instant;

/// Why a request produced no usable response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportFailure {
    Timeout,
    Connect(String),
    Body(String),
    Request(String),
}

impl std::fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportFailure::Timeout => write!(f, "request timed out"),
            TransportFailure::Connect(detail) => write!(f, "connect failed: {}", detail),
            TransportFailure::Body(detail) => write!(f, "body read failed: {}", detail),
            TransportFailure::Request(detail) => write!(f, "request failed: {}", detail),
        }
    }
}

/// Result of one dispatched request.
#[derive(Debug, Clone)]
pub struct AttackOutcome {
    /// 1-based dispatch position within one attack.
    pub sequence_index: u64,
    pub dispatched_at: Instant,
    pub latency: Duration,
    pub status: u16,
    pub body: Vec<u8>,
    pub succeeded: bool,
    pub failure: Option<TransportFailure>,
}

impl AttackOutcome {
    #[must_use]
    pub fn response(
        sequence_index: u64,
        dispatched_at: Instant,
        latency: Duration,
        status: u16,
        body: Vec<u8>,
    ) -> Self {
        Self {
            sequence_index,
            dispatched_at,
            latency,
            status,
            body,
            succeeded: (200..400).contains(&status),
            failure: None,
        }
    }

    #[must_use]
    pub const fn failed(
        sequence_index: u64,
        dispatched_at: Instant,
        latency: Duration,
        failure: TransportFailure,
    ) -> Self {
        Self {
            sequence_index,
            dispatched_at,
            latency,
            status: 0,
            body: Vec::new(),
            succeeded: false,
            failure: Some(failure),
        }
    }

    #[must_use]
    pub fn completed_at(&self) -> Instant {
        self.dispatched_at
            .checked_add(self.latency)
            .unwrap_or(self.dispatched_at)
    }
}
