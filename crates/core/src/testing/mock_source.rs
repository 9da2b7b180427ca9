//! Mock source for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

use crate::draw::ResultSet;
use crate::source::{Source, SourceError};

use super::fixtures;

/// Mock implementation of the Source trait.
///
/// Provides controllable behavior for testing:
/// - Return a configurable result set or error
/// - Count how many times it was queried
/// - Simulate slow upstreams
///
/// # Example
///
/// ```rust,ignore
/// use quini_core::testing::MockSource;
///
/// let source = MockSource::with_candidates("primary", &[1, 2, 3, 4, 5, 6]);
/// let results = source.fetch().await?;
/// assert_eq!(results.primary[0].numbers, vec![1, 2, 3, 4, 5, 6]);
/// assert_eq!(source.call_count(), 1);
/// ```
pub struct MockSource {
    name: String,
    response: RwLock<Result<ResultSet, SourceError>>,
    delay: RwLock<Option<Duration>>,
    calls: AtomicUsize,
}

impl std::fmt::Debug for MockSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockSource")
            .field("name", &self.name)
            .field("calls", &self.call_count())
            .finish()
    }
}

impl MockSource {
    /// A source that returns an empty result set.
    pub fn new(name: impl Into<String>) -> Self {
        Self::succeeding(name, ResultSet::default())
    }

    pub fn succeeding(name: impl Into<String>, results: ResultSet) -> Self {
        Self::with_response(name, Ok(results))
    }

    pub fn failing(name: impl Into<String>, error: SourceError) -> Self {
        Self::with_response(name, Err(error))
    }

    /// A source whose page yielded these candidates, partitioned as usual.
    pub fn with_candidates(name: impl Into<String>, candidates: &[u8]) -> Self {
        Self::succeeding(name, fixtures::results_from(candidates))
    }

    fn with_response(name: impl Into<String>, response: Result<ResultSet, SourceError>) -> Self {
        Self {
            name: name.into(),
            response: RwLock::new(response),
            delay: RwLock::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    /// Replace the response returned by subsequent fetches.
    pub async fn set_response(&self, response: Result<ResultSet, SourceError>) {
        *self.response.write().await = response;
    }

    /// Delay every fetch by `delay`.
    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    /// Number of fetches so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Source for MockSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<ResultSet, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.response.read().await.clone()
    }
}
