//! Sources backed by a scraped web page.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::config::ScraperConfig;
use crate::draw::ResultSet;

use super::extract::extract;
use super::{ExtractionStrategy, PageFetcher, Source, SourceError};

/// A results page read with one extraction strategy.
pub struct ScrapedSource {
    name: String,
    url: String,
    strategy: ExtractionStrategy,
    fetcher: Arc<dyn PageFetcher>,
}

impl ScrapedSource {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        strategy: ExtractionStrategy,
        fetcher: Arc<dyn PageFetcher>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            strategy,
            fetcher,
        }
    }
}

impl std::fmt::Debug for ScrapedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrapedSource")
            .field("name", &self.name)
            .field("url", &self.url)
            .field("strategy", &self.strategy.kind())
            .finish()
    }
}

#[async_trait]
impl Source for ScrapedSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<ResultSet, SourceError> {
        let html = self.fetcher.fetch(&self.url).await?;

        // Parsing runs on its own task so a panic in the HTML parser stays
        // contained to this source.
        let strategy = self.strategy.clone();
        let extraction = tokio::task::spawn_blocking(move || extract(&strategy, &html))
            .await
            .map_err(|e| SourceError::Parse(format!("extraction aborted: {}", e)))??;

        debug!(
            source = %self.name,
            strategy = self.strategy.kind(),
            candidates = extraction.candidates.len(),
            draw_id = %extraction.meta.draw_id,
            "Extracted candidates"
        );

        Ok(extraction.into_results())
    }
}

/// Build the configured sources in fallback order, sharing one fetcher.
pub fn build_sources(
    config: &ScraperConfig,
    fetcher: Arc<dyn PageFetcher>,
) -> Vec<Arc<dyn Source>> {
    config
        .sources
        .iter()
        .map(|s| {
            Arc::new(ScrapedSource::new(
                s.name.clone(),
                s.url.clone(),
                s.strategy.clone(),
                Arc::clone(&fetcher),
            )) as Arc<dyn Source>
        })
        .collect()
}
