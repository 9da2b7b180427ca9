//! Fixed example results served when no source produced usable data.

use super::{today, DrawEntry, DrawMeta, ResultSet, DEMO_DRAW_ID};

/// Note attached to synthetic results.
pub const EXAMPLE_NOTE: &str = "Datos de ejemplo - No se pudieron obtener resultados reales";

pub const EXAMPLE_PRIMARY: [u8; 6] = [5, 12, 23, 34, 41, 45];
pub const EXAMPLE_SECOND: [u8; 6] = [3, 8, 15, 22, 33, 40];
pub const EXAMPLE_BONUS: [u8; 6] = [1, 9, 18, 27, 36, 42];
pub const EXAMPLE_ALWAYS_OUT: [u8; 6] = [7, 14, 21, 28, 35, 44];

/// Build the example dataset, dated today and flagged with [`EXAMPLE_NOTE`].
pub fn example_results() -> ResultSet {
    let meta = DrawMeta::new(DEMO_DRAW_ID, today());
    ResultSet {
        primary: vec![DrawEntry::new(&meta, EXAMPLE_PRIMARY.to_vec())],
        second: vec![DrawEntry::new(&meta, EXAMPLE_SECOND.to_vec())],
        bonus: vec![DrawEntry::new(&meta, EXAMPLE_BONUS.to_vec())],
        always_out: vec![DrawEntry::new(&meta, EXAMPLE_ALWAYS_OUT.to_vec())],
        note: Some(EXAMPLE_NOTE.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_results_shape() {
        let results = example_results();
        assert!(results.is_accepted());
        assert!(results.is_synthetic());
        assert_eq!(results.populated_categories(), 4);
        assert_eq!(results.primary[0].numbers, vec![5, 12, 23, 34, 41, 45]);
        assert_eq!(results.always_out[0].numbers, vec![7, 14, 21, 28, 35, 44]);
        assert_eq!(results.primary[0].draw_id, "Demo");
        assert!(results.second[0].is_complete());
    }
}
