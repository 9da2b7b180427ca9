//! Types for the results source abstraction.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::draw::{ResultSet, NUMBERS_PER_DRAW};

/// Ball widget classes used by the results sites.
pub const DEFAULT_BALL_SELECTORS: [&str; 4] = [".ball", ".numero", ".number", ".bola"];

/// How numbers are read out of a source's HTML.
///
/// Each variant encodes assumptions about one site's markup, so a layout
/// change upstream only breaks the sources configured with that variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExtractionStrategy {
    /// Numbers from elements matching any of the selectors, in document order.
    SelectorScan { selectors: Vec<String> },
    /// Numbers from fixed rows of the first table on the page.
    FixedTableRow {
        /// Row holding the draw number and date.
        #[serde(default)]
        metadata_row: usize,
        /// Rows holding each category's numbers, in category order.
        #[serde(default = "default_number_rows")]
        number_rows: Vec<usize>,
    },
    /// Any short numeric cell, span or div, deduplicated and capped.
    PermissiveDedup {
        #[serde(default = "default_max_len")]
        max_len: usize,
        #[serde(default = "default_cap")]
        cap: usize,
    },
}

impl ExtractionStrategy {
    pub fn selector_scan() -> Self {
        Self::SelectorScan {
            selectors: DEFAULT_BALL_SELECTORS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn fixed_table_row() -> Self {
        Self::FixedTableRow {
            metadata_row: 0,
            number_rows: default_number_rows(),
        }
    }

    pub fn permissive_dedup() -> Self {
        Self::PermissiveDedup {
            max_len: default_max_len(),
            cap: default_cap(),
        }
    }

    /// Short name for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SelectorScan { .. } => "selector_scan",
            Self::FixedTableRow { .. } => "fixed_table_row",
            Self::PermissiveDedup { .. } => "permissive_dedup",
        }
    }
}

fn default_number_rows() -> Vec<usize> {
    vec![2, 4, 6, 8]
}

fn default_max_len() -> usize {
    2
}

fn default_cap() -> usize {
    4 * NUMBERS_PER_DRAW
}

/// Errors that can occur while fetching results from a source.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
    /// Connection failure, timeout or non-2xx status.
    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Insufficient data: {found} primary numbers found, 6 required")]
    InsufficientData { found: usize },
}

impl SourceError {
    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Parse(_) => "parse",
            Self::InsufficientData { .. } => "insufficient_data",
        }
    }
}

/// A site that publishes draw results.
#[async_trait]
pub trait Source: Send + Sync {
    /// Source name for logging.
    fn name(&self) -> &str;

    /// Fetch the page and normalize it into a result set.
    async fn fetch(&self) -> Result<ResultSet, SourceError>;
}

/// Retrieves raw page bodies.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, SourceError>;
}
