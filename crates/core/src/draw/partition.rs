//! Candidate validation and slicing into categories.

use std::collections::HashSet;

use super::{Category, DrawEntry, DrawMeta, ResultSet, MAX_NUMBER, NUMBERS_PER_DRAW};

/// Parse one scraped token as a ball number.
///
/// The trimmed text must be a plain integer in `0..=45`.
pub fn parse_candidate(text: &str) -> Option<u8> {
    let value: i64 = text.trim().parse().ok()?;
    if (0..=MAX_NUMBER as i64).contains(&value) {
        Some(value as u8)
    } else {
        None
    }
}

/// Drop repeated values, keeping first occurrences in order, then truncate.
pub fn dedup_capped(candidates: Vec<u8>, cap: usize) -> Vec<u8> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|n| seen.insert(*n))
        .take(cap)
        .collect()
}

/// Slice candidates into the four categories.
///
/// Each category takes the six numbers at its offset and is emitted only when
/// all six are available, so later categories are never filled before
/// earlier ones.
pub fn partition(candidates: &[u8], meta: &DrawMeta) -> ResultSet {
    let mut results = ResultSet::default();

    for category in Category::ALL {
        let start = category.offset();
        let end = start + NUMBERS_PER_DRAW;
        if candidates.len() < end {
            break;
        }
        results
            .category_mut(category)
            .push(DrawEntry::new(meta, candidates[start..end].to_vec()));
    }

    results
}
