//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Source attempts (by source and outcome)
//! - Source latency
//! - Fallbacks to example data

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts};

/// Source attempts by source name and outcome.
pub static SOURCE_ATTEMPTS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("quini_source_attempts_total", "Total source fetch attempts"),
        &["source", "outcome"], // "accepted", "network", "parse", "insufficient_data"
    )
    .unwrap()
});

/// Source fetch duration in seconds.
pub static SOURCE_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "quini_source_duration_seconds",
            "Duration of a single source fetch and extraction",
        )
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 15.0]),
        &["source"],
    )
    .unwrap()
});

/// Requests answered with example data.
pub static FALLBACKS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "quini_fallbacks_total",
        "Requests where every source failed and example data was served",
    )
    .unwrap()
});

/// Get all core metrics for registration.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(SOURCE_ATTEMPTS.clone()),
        Box::new(SOURCE_DURATION.clone()),
        Box::new(FALLBACKS_TOTAL.clone()),
    ]
}
