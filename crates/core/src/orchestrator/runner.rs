//! Fallback orchestrator implementation.

use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use crate::draw::{example_results, ResultSet};
use crate::metrics::{FALLBACKS_TOTAL, SOURCE_ATTEMPTS, SOURCE_DURATION};
use crate::source::{Source, SourceError};

use super::types::{FetchOutcome, SourceAttempt};

/// Tries sources in priority order and degrades to example data.
///
/// Holds no mutable state: each call to [`fetch_results`](Self::fetch_results)
/// starts again from the first source, so concurrent requests never interact.
pub struct FallbackOrchestrator {
    sources: Vec<Arc<dyn Source>>,
}

impl FallbackOrchestrator {
    pub fn new(sources: Vec<Arc<dyn Source>>) -> Self {
        Self { sources }
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Run the chain: first accepted result wins, example data otherwise.
    pub async fn fetch_results(&self) -> FetchOutcome {
        let mut attempts = Vec::new();

        for source in &self.sources {
            info!(source = source.name(), "Trying source");

            match run_source(source.as_ref()).await {
                Ok(results) => {
                    info!(
                        source = source.name(),
                        categories = results.populated_categories(),
                        "Results obtained"
                    );
                    return FetchOutcome {
                        results,
                        source: Some(source.name().to_string()),
                        attempts,
                    };
                }
                Err(e) => {
                    warn!(source = source.name(), kind = e.kind(), "Source failed: {}", e);
                    attempts.push(SourceAttempt::new(source.name(), &e));
                }
            }
        }

        warn!(
            tried = attempts.len(),
            "No source produced usable results, serving example data"
        );
        FALLBACKS_TOTAL.inc();

        FetchOutcome {
            results: example_results(),
            source: None,
            attempts,
        }
    }

    /// Query a single source without falling back.
    ///
    /// Returns `None` when `index` is out of range.
    pub async fn fetch_from(&self, index: usize) -> Option<Result<ResultSet, SourceError>> {
        let source = self.sources.get(index)?;
        Some(run_source(source.as_ref()).await)
    }
}

/// Fetch from one source and apply the acceptance check.
async fn run_source(source: &dyn Source) -> Result<ResultSet, SourceError> {
    let start = Instant::now();
    let outcome = source.fetch().await.and_then(|results| {
        if results.is_accepted() {
            Ok(results)
        } else {
            Err(SourceError::InsufficientData {
                found: results
                    .latest_primary()
                    .map(|entry| entry.numbers.len())
                    .unwrap_or(0),
            })
        }
    });

    SOURCE_DURATION
        .with_label_values(&[source.name()])
        .observe(start.elapsed().as_secs_f64());
    let label = match &outcome {
        Ok(_) => "accepted",
        Err(e) => e.kind(),
    };
    SOURCE_ATTEMPTS
        .with_label_values(&[source.name(), label])
        .inc();

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{DrawEntry, DrawMeta, EXAMPLE_NOTE};
    use crate::testing::{fixtures, MockSource};

    fn orchestrator(sources: &[Arc<MockSource>]) -> FallbackOrchestrator {
        FallbackOrchestrator::new(
            sources
                .iter()
                .map(|s| Arc::clone(s) as Arc<dyn Source>)
                .collect(),
        )
    }

    #[tokio::test]
    async fn test_first_accepted_source_short_circuits() {
        let first = Arc::new(MockSource::with_candidates("first", &(0..24).collect::<Vec<u8>>()));
        let second = Arc::new(MockSource::with_candidates("second", &[9; 6]));
        let orch = orchestrator(&[first.clone(), second.clone()]);

        let outcome = orch.fetch_results().await;

        assert_eq!(outcome.source.as_deref(), Some("first"));
        assert!(outcome.attempts.is_empty());
        assert_eq!(outcome.results.primary[0].numbers, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(
            outcome.results.always_out[0].numbers,
            vec![18, 19, 20, 21, 22, 23]
        );
        assert!(outcome.results.note.is_none());
        assert_eq!(first.call_count(), 1);
        assert_eq!(second.call_count(), 0);
    }

    #[tokio::test]
    async fn test_failing_source_advances_to_next() {
        let down = Arc::new(MockSource::failing(
            "down",
            SourceError::Network("timeout".into()),
        ));
        let broken = Arc::new(MockSource::failing(
            "broken",
            SourceError::Parse("bad markup".into()),
        ));
        let good = Arc::new(MockSource::with_candidates("good", &[1, 2, 3, 4, 5, 6]));
        let orch = orchestrator(&[down.clone(), broken.clone(), good.clone()]);

        let outcome = orch.fetch_results().await;

        assert_eq!(outcome.source.as_deref(), Some("good"));
        assert_eq!(outcome.attempts.len(), 2);
        assert_eq!(outcome.attempts[0].source, "down");
        assert_eq!(outcome.attempts[0].kind, "network");
        assert_eq!(outcome.attempts[1].kind, "parse");
        assert_eq!(outcome.results.primary[0].numbers, vec![1, 2, 3, 4, 5, 6]);
        assert!(outcome.results.second.is_empty());
    }

    #[tokio::test]
    async fn test_five_primary_numbers_rejected() {
        let meta = DrawMeta::new("1", "1/1/2026");
        let short = Arc::new(MockSource::succeeding(
            "short",
            ResultSet {
                primary: vec![DrawEntry::new(&meta, vec![1, 2, 3, 4, 5])],
                ..Default::default()
            },
        ));
        let good = Arc::new(MockSource::with_candidates("good", &[10, 11, 12, 13, 14, 15]));
        let orch = orchestrator(&[short.clone(), good.clone()]);

        let outcome = orch.fetch_results().await;

        assert_eq!(outcome.source.as_deref(), Some("good"));
        assert_eq!(outcome.attempts[0].kind, "insufficient_data");
        assert!(outcome.attempts[0].error.contains("5 primary numbers"));
        assert_eq!(short.call_count(), 1);
        assert_eq!(good.call_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_extraction_rejected() {
        let empty = Arc::new(MockSource::with_candidates("empty", &[1, 2, 3]));
        let orch = orchestrator(&[empty]);

        let outcome = orch.fetch_results().await;
        assert!(outcome.is_fallback());
        assert_eq!(
            outcome.attempts[0].error,
            SourceError::InsufficientData { found: 0 }.to_string()
        );
    }

    #[tokio::test]
    async fn test_all_sources_fail_serves_example_data() {
        let sources: Vec<_> = ["a", "b", "c"]
            .into_iter()
            .map(|name| {
                Arc::new(MockSource::failing(
                    name,
                    SourceError::Network("unreachable".into()),
                ))
            })
            .collect();
        let orch = orchestrator(&sources);

        let outcome = orch.fetch_results().await;

        assert!(outcome.is_fallback());
        assert_eq!(outcome.attempts.len(), 3);
        assert_eq!(outcome.results.primary[0].numbers, vec![5, 12, 23, 34, 41, 45]);
        assert_eq!(outcome.results.note.as_deref(), Some(EXAMPLE_NOTE));
        for source in &sources {
            assert_eq!(source.call_count(), 1);
        }
    }

    #[tokio::test]
    async fn test_each_run_restarts_from_first_source() {
        let flaky = Arc::new(MockSource::failing(
            "flaky",
            SourceError::Network("reset".into()),
        ));
        let good = Arc::new(MockSource::succeeding("good", fixtures::results_from(&[1; 24])));
        let orch = orchestrator(&[flaky.clone(), good.clone()]);

        orch.fetch_results().await;
        flaky
            .set_response(Ok(fixtures::results_from(&[2; 6])))
            .await;
        let outcome = orch.fetch_results().await;

        assert_eq!(outcome.source.as_deref(), Some("flaky"));
        assert_eq!(flaky.call_count(), 2);
        assert_eq!(good.call_count(), 1);
    }

    #[tokio::test]
    async fn test_no_sources_serves_example_data() {
        let orch = FallbackOrchestrator::new(Vec::new());
        let outcome = orch.fetch_results().await;
        assert!(outcome.is_fallback());
        assert!(outcome.attempts.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_from_single_source() {
        let down = Arc::new(MockSource::failing(
            "down",
            SourceError::Network("refused".into()),
        ));
        let good = Arc::new(MockSource::with_candidates("good", &[1, 2, 3, 4, 5, 6]));
        let orch = orchestrator(&[down.clone(), good.clone()]);

        let result = orch.fetch_from(0).await.unwrap();
        assert!(matches!(result, Err(SourceError::Network(_))));
        assert_eq!(good.call_count(), 0);

        assert!(orch.fetch_from(1).await.unwrap().is_ok());
        assert!(orch.fetch_from(2).await.is_none());
        assert_eq!(orch.source_names(), vec!["down", "good"]);
    }
}
