//! Mock page fetcher for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::source::{PageFetcher, SourceError};

/// Mock implementation of the PageFetcher trait.
///
/// Serves canned bodies or errors per URL and records every requested URL.
/// Unknown URLs fail with a network error, like an unreachable host.
#[derive(Debug, Default)]
pub struct MockFetcher {
    pages: RwLock<HashMap<String, Result<String, SourceError>>>,
    requests: RwLock<Vec<String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_page(&self, url: &str, html: String) {
        self.pages.write().await.insert(url.to_string(), Ok(html));
    }

    pub async fn set_error(&self, url: &str, error: SourceError) {
        self.pages.write().await.insert(url.to_string(), Err(error));
    }

    /// URLs requested so far, in order.
    pub async fn requested_urls(&self) -> Vec<String> {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<String, SourceError> {
        self.requests.write().await.push(url.to_string());

        self.pages
            .read()
            .await
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(SourceError::Network(format!("no mock page for {}", url))))
    }
}
