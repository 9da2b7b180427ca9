//! Types for normalized draw results.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Highest ball number printed on a Quini 6 ticket.
pub const MAX_NUMBER: u8 = 45;

/// Numbers per category in a complete draw.
pub const NUMBERS_PER_DRAW: usize = 6;

/// Placeholder draw id when the page does not name the draw.
pub const LATEST_DRAW_ID: &str = "Último";

/// Draw id used by the example dataset.
pub const DEMO_DRAW_ID: &str = "Demo";

/// The four number sets published per draw, in partition order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "tradicional")]
    Primary,
    #[serde(rename = "segunda")]
    Second,
    #[serde(rename = "revancha")]
    Bonus,
    #[serde(rename = "siempreSale")]
    AlwaysOut,
}

impl Category {
    /// All categories in fill order.
    pub const ALL: [Category; 4] = [
        Category::Primary,
        Category::Second,
        Category::Bonus,
        Category::AlwaysOut,
    ];

    /// Offset of this category's slice within a candidate sequence.
    pub fn offset(self) -> usize {
        match self {
            Category::Primary => 0,
            Category::Second => NUMBERS_PER_DRAW,
            Category::Bonus => 2 * NUMBERS_PER_DRAW,
            Category::AlwaysOut => 3 * NUMBERS_PER_DRAW,
        }
    }
}

/// Draw identification shared by every category of one scrape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawMeta {
    pub draw_id: String,
    pub date: String,
}

impl DrawMeta {
    pub fn new(draw_id: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            draw_id: draw_id.into(),
            date: date.into(),
        }
    }

    /// Placeholder metadata: "Último" and today's date.
    pub fn latest() -> Self {
        Self::new(LATEST_DRAW_ID, today())
    }
}

/// Today's date in the `es-AR` short form (`d/m/yyyy`, no padding).
pub fn today() -> String {
    Local::now().format("%-d/%-m/%Y").to_string()
}

/// One category of one draw.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrawEntry {
    #[serde(rename = "sorteo")]
    pub draw_id: String,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "numeros")]
    pub numbers: Vec<u8>,
}

impl DrawEntry {
    pub fn new(meta: &DrawMeta, numbers: Vec<u8>) -> Self {
        Self {
            draw_id: meta.draw_id.clone(),
            date: meta.date.clone(),
            numbers,
        }
    }

    /// A full set of six numbers, all within range.
    pub fn is_complete(&self) -> bool {
        self.numbers.len() == NUMBERS_PER_DRAW && self.numbers.iter().all(|n| *n <= MAX_NUMBER)
    }
}

/// Normalized results for one request.
///
/// Each category holds at most one entry; an empty category means fewer than
/// six numbers were available for it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultSet {
    #[serde(rename = "tradicional", default)]
    pub primary: Vec<DrawEntry>,
    #[serde(rename = "segunda", default)]
    pub second: Vec<DrawEntry>,
    #[serde(rename = "revancha", default)]
    pub bonus: Vec<DrawEntry>,
    #[serde(rename = "siempreSale", default)]
    pub always_out: Vec<DrawEntry>,
    /// Set only on synthetic data.
    #[serde(rename = "nota", default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ResultSet {
    pub fn category(&self, category: Category) -> &[DrawEntry] {
        match category {
            Category::Primary => &self.primary,
            Category::Second => &self.second,
            Category::Bonus => &self.bonus,
            Category::AlwaysOut => &self.always_out,
        }
    }

    pub fn category_mut(&mut self, category: Category) -> &mut Vec<DrawEntry> {
        match category {
            Category::Primary => &mut self.primary,
            Category::Second => &mut self.second,
            Category::Bonus => &mut self.bonus,
            Category::AlwaysOut => &mut self.always_out,
        }
    }

    /// The first primary entry, if any.
    pub fn latest_primary(&self) -> Option<&DrawEntry> {
        self.primary.first()
    }

    /// Acceptance predicate: a primary entry with exactly six numbers.
    pub fn is_accepted(&self) -> bool {
        self.latest_primary()
            .map(|entry| entry.numbers.len() == NUMBERS_PER_DRAW)
            .unwrap_or(false)
    }

    /// Number of categories holding an entry.
    pub fn populated_categories(&self) -> usize {
        Category::ALL
            .iter()
            .filter(|c| !self.category(**c).is_empty())
            .count()
    }

    pub fn is_synthetic(&self) -> bool {
        self.note.is_some()
    }
}
