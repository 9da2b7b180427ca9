//! HTML extraction strategies.
//!
//! All strategies share one contract: given a page, produce an ordered list
//! of candidate numbers (already range-checked) plus draw metadata. A page
//! with no usable numbers yields an empty list rather than an error; deciding
//! whether the list is enough is left to the caller.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::draw::{
    dedup_capped, parse_candidate, partition, DrawMeta, ResultSet, LATEST_DRAW_ID,
    NUMBERS_PER_DRAW,
};

use super::{ExtractionStrategy, SourceError};

/// "Sorteo 3215", "Sorteo Nº 3215", "SORTEO: 3215", "Sorteo nro. 3215".
/// The second group catches dates ("Sorteo 19/10/2026").
static DRAW_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)sorteo\s*(?:(?:nro\.?|n\s*[º°o]\.?|n\.|#|:)\s*)?(\d+)(/?)").unwrap()
});
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b").unwrap());

/// Output of an extraction pass, before partitioning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub candidates: Vec<u8>,
    pub meta: DrawMeta,
}

impl Extraction {
    fn latest(candidates: Vec<u8>) -> Self {
        Self {
            candidates,
            meta: DrawMeta::latest(),
        }
    }

    pub fn into_results(self) -> ResultSet {
        partition(&self.candidates, &self.meta)
    }
}

/// Run `strategy` over an HTML page.
pub fn extract(strategy: &ExtractionStrategy, html: &str) -> Result<Extraction, SourceError> {
    let document = Html::parse_document(html);

    match strategy {
        ExtractionStrategy::SelectorScan { selectors } => scan_selectors(&document, selectors),
        ExtractionStrategy::FixedTableRow {
            metadata_row,
            number_rows,
        } => scan_table_rows(&document, *metadata_row, number_rows),
        ExtractionStrategy::PermissiveDedup { max_len, cap } => {
            scan_permissive(&document, *max_len, *cap)
        }
    }
}

fn parse_selector(selector: &str) -> Result<Selector, SourceError> {
    Selector::parse(selector)
        .map_err(|err| SourceError::Parse(format!("invalid selector {:?}: {:?}", selector, err)))
}

fn text_content(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

/// Strategy A: ball widgets matched by a selector list.
///
/// The selectors are combined into one group, so each element is read once
/// and numbers come out in document order.
fn scan_selectors(document: &Html, selectors: &[String]) -> Result<Extraction, SourceError> {
    let group = parse_selector(&selectors.join(", "))?;

    let candidates = document
        .select(&group)
        .filter_map(|element| parse_candidate(&text_content(&element)))
        .collect();

    Ok(Extraction::latest(candidates))
}

struct TableSelectors {
    table: Selector,
    row: Selector,
    cell: Selector,
}

impl TableSelectors {
    fn new() -> Result<Self, SourceError> {
        Ok(Self {
            table: parse_selector("table")?,
            row: parse_selector("tr")?,
            cell: parse_selector("td, th")?,
        })
    }
}

/// Strategy B: fixed rows of the first table.
fn scan_table_rows(
    document: &Html,
    metadata_row: usize,
    number_rows: &[usize],
) -> Result<Extraction, SourceError> {
    let selectors = TableSelectors::new()?;

    let Some(table) = document.select(&selectors.table).next() else {
        return Ok(Extraction::latest(Vec::new()));
    };
    let rows: Vec<ElementRef<'_>> = table.select(&selectors.row).collect();

    let meta = rows
        .get(metadata_row)
        .map(|row| parse_draw_meta(&text_content(row)))
        .unwrap_or_else(DrawMeta::latest);

    // One row per category; the first incomplete row ends the draw so a
    // short row never borrows numbers from the next category.
    let mut candidates = Vec::with_capacity(number_rows.len() * NUMBERS_PER_DRAW);
    for index in number_rows {
        let Some(row) = rows.get(*index) else {
            break;
        };
        let numbers: Vec<u8> = row
            .select(&selectors.cell)
            .filter_map(|cell| parse_candidate(&text_content(&cell)))
            .collect();
        if numbers.len() != NUMBERS_PER_DRAW {
            debug!(row = index, found = numbers.len(), "Incomplete number row");
            break;
        }
        candidates.extend(numbers);
    }

    Ok(Extraction { candidates, meta })
}

/// Strategy C: any short numeric text in cells, spans and divs.
fn scan_permissive(document: &Html, max_len: usize, cap: usize) -> Result<Extraction, SourceError> {
    let group = parse_selector("td, span, div")?;

    let raw = document
        .select(&group)
        .filter_map(|element| {
            let text = text_content(&element);
            let text = text.trim();
            if text.chars().count() <= max_len {
                parse_candidate(text)
            } else {
                None
            }
        })
        .collect();

    Ok(Extraction::latest(dedup_capped(raw, cap)))
}

/// Pull the draw number and date out of a header row.
///
/// Missing pieces fall back to the "Último" placeholder and today's date.
pub fn parse_draw_meta(text: &str) -> DrawMeta {
    let fallback = DrawMeta::latest();

    let draw_id = DRAW_ID_RE
        .captures_iter(text)
        .find(|caps| caps.get(2).is_some_and(|slash| slash.as_str().is_empty()))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| LATEST_DRAW_ID.to_string());

    let date = DATE_RE
        .captures(text)
        .and_then(|caps| {
            let day: u32 = caps.get(1)?.as_str().parse().ok()?;
            let month: u32 = caps.get(2)?.as_str().parse().ok()?;
            let year = caps.get(3)?.as_str();
            Some(format!("{}/{}/{}", day, month, year))
        })
        .unwrap_or(fallback.date);

    DrawMeta { draw_id, date }
}
