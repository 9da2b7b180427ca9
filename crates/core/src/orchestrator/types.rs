use serde::Serialize;

use crate::draw::ResultSet;
use crate::source::SourceError;

/// A source that was tried and rejected.
#[derive(Debug, Clone, Serialize)]
pub struct SourceAttempt {
    pub source: String,
    pub kind: &'static str,
    pub error: String,
}

impl SourceAttempt {
    pub fn new(source: &str, error: &SourceError) -> Self {
        Self {
            source: source.to_string(),
            kind: error.kind(),
            error: error.to_string(),
        }
    }
}

/// Result of one run through the source chain.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub results: ResultSet,
    /// Source that produced `results`; `None` for example data.
    pub source: Option<String>,
    /// Rejected sources, in the order they were tried.
    pub attempts: Vec<SourceAttempt>,
}

impl FetchOutcome {
    pub fn is_fallback(&self) -> bool {
        self.source.is_none()
    }
}
