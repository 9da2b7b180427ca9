use axum::{http::header, response::IntoResponse};
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::metrics::encode_metrics;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version reported by the index route; existing clients read this value.
pub const API_VERSION: &str = "2.0";

#[derive(Serialize)]
pub struct IndexResponse {
    pub message: String,
    pub endpoints: Endpoints,
    pub version: String,
}

#[derive(Serialize)]
pub struct Endpoints {
    #[serde(rename = "todosLosnumeros")]
    pub all_numbers: String,
    pub sorteos: String,
    pub health: String,
    pub metrics: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "API de Quini 6 - Funcionando ✅".to_string(),
        endpoints: Endpoints {
            all_numbers: "/v1/q6r/todoslosnumeros".to_string(),
            sorteos: "/v1/q6r/sorteos".to_string(),
            health: "/health".to_string(),
            metrics: "/metrics".to_string(),
        },
        version: API_VERSION.to_string(),
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

pub async fn metrics() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        encode_metrics(),
    )
}
