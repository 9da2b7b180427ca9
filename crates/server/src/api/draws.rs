//! Draw result endpoints.

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

use quini_core::ResultSet;

use crate::state::AppState;

/// Placeholder for a draw field that could not be scraped.
const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Serialize)]
pub struct DrawsResponse {
    pub sorteos: Vec<DrawSummary>,
}

#[derive(Debug, Serialize)]
pub struct DrawSummary {
    pub numero: String,
    pub fecha: String,
}

impl DrawSummary {
    fn unavailable() -> Self {
        Self {
            numero: NOT_AVAILABLE.to_string(),
            fecha: NOT_AVAILABLE.to_string(),
        }
    }
}

/// GET /v1/q6r/todoslosnumeros
///
/// Always 200: when every source fails the body is example data with `nota`.
pub async fn all_numbers(State(state): State<Arc<AppState>>) -> Json<ResultSet> {
    info!("Fetching Quini 6 results");
    let outcome = state.orchestrator().fetch_results().await;
    Json(outcome.results)
}

/// GET /v1/q6r/sorteos
///
/// Summary of the latest draw from the first configured source only.
pub async fn latest_draws(State(state): State<Arc<AppState>>) -> Json<DrawsResponse> {
    let summary = match state.orchestrator().fetch_from(0).await {
        Some(Ok(results)) => results
            .latest_primary()
            .map(|entry| DrawSummary {
                numero: entry.draw_id.clone(),
                fecha: entry.date.clone(),
            })
            .unwrap_or_else(DrawSummary::unavailable),
        Some(Err(e)) => {
            warn!("Draw summary unavailable: {}", e);
            DrawSummary::unavailable()
        }
        None => {
            warn!("No sources configured for draw summary");
            DrawSummary::unavailable()
        }
    };

    Json(DrawsResponse {
        sorteos: vec![summary],
    })
}
