use crate::args::PositiveUsize;

/// One `(query, concurrency)` pair to benchmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    id: usize,
    query: String,
    concurrency: PositiveUsize,
}

impl TestCase {
    #[must_use]
    pub const fn new(id: usize, query: String, concurrency: PositiveUsize) -> Self {
        Self {
            id,
            query,
            concurrency,
        }
    }

    /// Zero-based row position in the input.
    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }

    /// Query fragment appended after `?`, kept verbatim.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Requests per interval, and the size of the worker pool.
    #[must_use]
    pub const fn concurrency(&self) -> PositiveUsize {
        self.concurrency
    }
}
