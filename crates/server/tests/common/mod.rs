//! Common test utilities for E2E testing with mocks.
//!
//! This module provides a test fixture that creates an in-process server
//! with mock sources injected, so every route can be exercised without
//! reaching the real results sites.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use quini_core::{testing::MockSource, FallbackOrchestrator, Source};
use quini_server::{api::create_router, state::AppState};

/// Re-export fixtures for test convenience
#[allow(unused_imports)]
pub use quini_core::testing::fixtures;

/// Test fixture for E2E testing with mock sources.
///
/// Sources are tried in the order given, exactly like the configured
/// fallback chain in production.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_latest_numbers() {
///     let fixture = TestFixture::with_sources(vec![
///         MockSource::with_candidates("primary", &[1, 2, 3, 4, 5, 6]),
///     ]);
///
///     let response = fixture.get("/v1/q6r/todoslosnumeros").await;
///
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock sources, in fallback order
    pub sources: Vec<Arc<MockSource>>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
    pub text: String,
}

impl TestFixture {
    /// Three sources that all fail with a network error.
    #[allow(dead_code)]
    pub fn all_failing() -> Self {
        Self::with_sources(
            ["Quini-6-Resultados", "LotoFacil", "TuJugada"]
                .into_iter()
                .map(|name| {
                    MockSource::failing(
                        name,
                        quini_core::SourceError::Network("connection refused".to_string()),
                    )
                })
                .collect(),
        )
    }

    /// Create a test fixture over the given sources.
    pub fn with_sources(sources: Vec<MockSource>) -> Self {
        let sources: Vec<Arc<MockSource>> = sources.into_iter().map(Arc::new).collect();
        let chain: Vec<Arc<dyn Source>> = sources
            .iter()
            .map(|s| Arc::clone(s) as Arc<dyn Source>)
            .collect();

        let state = Arc::new(AppState::new(Arc::new(FallbackOrchestrator::new(chain))));

        Self {
            router: create_router(state),
            sources,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// Send a GET request with an `Origin` header, as a browser would.
    #[allow(dead_code)]
    pub async fn get_with_origin(&self, path: &str, origin: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .header("Origin", origin)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse {
            status,
            headers,
            body,
            text,
        }
    }
}
