//! Draw result sources.
//!
//! This module provides a `Source` trait for reading the latest draw from a
//! third-party site, a `PageFetcher` for the HTTP side, and the extraction
//! strategies that turn each site's markup into candidate numbers.

mod extract;
mod fetcher;
mod scraped;
mod types;

pub use extract::{extract, parse_draw_meta, Extraction};
pub use fetcher::HttpFetcher;
pub use scraped::{build_sources, ScrapedSource};
pub use types::*;
