//! Fallback orchestration across result sources.
//!
//! Sources are tried one at a time in priority order. The first result with a
//! complete primary draw wins; if none qualifies, the example dataset is
//! served instead. Nothing is cached between runs.

mod runner;
mod types;

pub use runner::FallbackOrchestrator;
pub use types::{FetchOutcome, SourceAttempt};
