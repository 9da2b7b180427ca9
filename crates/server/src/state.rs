use quini_core::FallbackOrchestrator;
use std::sync::Arc;

/// Shared application state
///
/// Built once at startup and read-only afterwards; every request runs its
/// own pass through the orchestrator.
pub struct AppState {
    orchestrator: Arc<FallbackOrchestrator>,
}

impl AppState {
    pub fn new(orchestrator: Arc<FallbackOrchestrator>) -> Self {
        Self { orchestrator }
    }

    pub fn orchestrator(&self) -> &FallbackOrchestrator {
        self.orchestrator.as_ref()
    }
}
