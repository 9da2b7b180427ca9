//! Testing utilities and mock implementations.
//!
//! This module provides mock implementations of the source traits and HTML
//! fixtures shaped like the upstream results pages, so the fallback chain and
//! the HTTP API can be exercised without network access.
//!
//! # Example
//!
//! ```rust,ignore
//! use quini_core::testing::{fixtures, MockFetcher, MockSource};
//!
//! let fetcher = MockFetcher::new();
//! fetcher.set_page("http://test/", fixtures::ball_page("ball", &[1, 2, 3, 4, 5, 6])).await;
//!
//! let failing = MockSource::failing("down", SourceError::Network("timeout".into()));
//! ```

mod mock_fetcher;
mod mock_source;

pub use mock_fetcher::MockFetcher;
pub use mock_source::MockSource;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::draw::{partition, DrawMeta, ResultSet};

    /// Partition `candidates` under fixed test metadata.
    pub fn results_from(candidates: &[u8]) -> ResultSet {
        partition(candidates, &DrawMeta::new("3210", "12/10/2026"))
    }

    /// A page with one `<span class="{class}">` per number.
    pub fn ball_page(class: &str, numbers: &[u8]) -> String {
        let balls: String = numbers
            .iter()
            .map(|n| format!("      <span class=\"{}\">{:02}</span>\n", class, n))
            .collect();
        format!(
            "<!DOCTYPE html>\n<html>\n<body>\n  <h1>Quini 6</h1>\n  <div class=\"sorteo\">\n{}  </div>\n</body>\n</html>\n",
            balls
        )
    }

    /// A results table: `header` in row 0, then a label row before each
    /// category's numbers, so the numbers land on rows 2, 4, 6 and 8.
    pub fn table_page(header: &str, categories: &[&[u8]]) -> String {
        let labels = ["TRADICIONAL", "LA SEGUNDA", "REVANCHA", "SIEMPRE SALE"];
        let mut rows = format!("    <tr><th colspan=\"6\">{}</th></tr>\n", header);
        for (i, numbers) in categories.iter().enumerate() {
            let label = labels.get(i).copied().unwrap_or("EXTRA");
            rows.push_str(&format!("    <tr><td colspan=\"6\">{}</td></tr>\n", label));
            let cells: String = numbers
                .iter()
                .map(|n| format!("<td>{:02}</td>", n))
                .collect();
            rows.push_str(&format!("    <tr>{}</tr>\n", cells));
        }
        format!(
            "<!DOCTYPE html>\n<html>\n<body>\n  <table class=\"resultados\">\n{}  </table>\n</body>\n</html>\n",
            rows
        )
    }

    /// A loosely structured page: every token in its own `<span>`.
    pub fn loose_page(tokens: &[&str]) -> String {
        let spans: String = tokens
            .iter()
            .map(|t| format!("<span>{}</span>", t))
            .collect();
        format!(
            "<!DOCTYPE html>\n<html>\n<body>\n  <div class=\"contenido\">{}</div>\n</body>\n</html>\n",
            spans
        )
    }
}
