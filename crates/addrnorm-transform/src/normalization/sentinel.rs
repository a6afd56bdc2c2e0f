//! Placeholder cleanup.
//!
//! Upstream data marks unknown values with `"UNKNOWN"`, `"None"` or an empty
//! string. Every such cell, in any column, becomes [`CellValue::Missing`].

use addrnorm_model::columns::SENTINELS;
use addrnorm_model::{CellValue, Table};

/// True when `value` is one of the placeholder strings in [`SENTINELS`].
pub fn is_sentinel(value: &str) -> bool {
    SENTINELS.contains(&value)
}

/// Replaces sentinel text in every cell. Returns the number of cells changed.
///
/// Running it again on its own output changes nothing.
pub fn reconcile_sentinels(table: &mut Table) -> usize {
    let mut replaced = 0usize;
    for cell in table.cells_mut() {
        if cell.as_text().is_some_and(is_sentinel) {
            *cell = CellValue::Missing;
            replaced += 1;
        }
    }
    replaced
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_exact_sentinels_only() {
        assert!(is_sentinel("UNKNOWN"));
        assert!(is_sentinel("None"));
        assert!(is_sentinel(""));
        assert!(!is_sentinel("unknown"));
        assert!(!is_sentinel("NONE"));
        assert!(!is_sentinel(" "));
        assert!(!is_sentinel("None "));
    }

    #[test]
    fn replaces_across_all_columns() {
        let mut table = Table::from_rows(
            &["a", "b"],
            vec![
                vec![Some("UNKNOWN"), Some("keep")],
                vec![Some(""), Some("None")],
                vec![None, Some("UNKNOWN CITY")],
            ],
        )
        .unwrap();

        assert_eq!(reconcile_sentinels(&mut table), 3);
        assert_eq!(table.value(0, "a"), Some(&CellValue::Missing));
        assert_eq!(table.value(0, "b"), Some(&CellValue::text("keep")));
        assert_eq!(table.value(1, "a"), Some(&CellValue::Missing));
        assert_eq!(table.value(1, "b"), Some(&CellValue::Missing));
        assert_eq!(table.value(2, "b"), Some(&CellValue::text("UNKNOWN CITY")));

        assert_eq!(reconcile_sentinels(&mut table), 0);
    }
}
