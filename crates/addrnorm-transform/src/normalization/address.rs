//! City/state splitting.
//!
//! Source rows often carry "SPRINGFIELD IL" on the city line and leave the
//! state line blank. Only the last whitespace-separated token is taken as the
//! state, so "NEW YORK" with no state yields city "NEW" and state "YORK".

use serde::{Deserialize, Serialize};
use tracing::trace;

use addrnorm_model::columns::{CITY, STATE};
use addrnorm_model::{CellValue, Table};

use crate::error::{Result, TransformError};
use crate::normalization::sentinel::is_sentinel;

/// City and state recovered from a combined city line.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AddressRecord {
    pub city: Option<String>,
    pub state: Option<String>,
}

/// Splits `combined` on its last whitespace character.
///
/// - `None` gives an empty record.
/// - With a split point, both halves are trimmed; an empty right half leaves
///   the state absent.
/// - Without whitespace the text is returned unchanged as the city.
///
/// # Examples
///
/// ```
/// use addrnorm_transform::split_city_state;
///
/// let record = split_city_state(Some("Springfield IL"));
/// assert_eq!(record.city.as_deref(), Some("Springfield"));
/// assert_eq!(record.state.as_deref(), Some("IL"));
///
/// let record = split_city_state(Some("Chicago"));
/// assert_eq!(record.city.as_deref(), Some("Chicago"));
/// assert_eq!(record.state, None);
/// ```
pub fn split_city_state(combined: Option<&str>) -> AddressRecord {
    let Some(text) = combined else {
        return AddressRecord::default();
    };
    let Some((pos, ws)) = text.char_indices().rev().find(|(_, ch)| ch.is_whitespace()) else {
        return AddressRecord {
            city: Some(text.to_string()),
            state: None,
        };
    };
    let city = text[..pos].trim();
    let state = text[pos + ws.len_utf8()..].trim();
    AddressRecord {
        city: Some(city.to_string()),
        state: (!state.is_empty()).then(|| state.to_string()),
    }
}

/// Applies [`split_city_state`] to every row whose state is missing or holds
/// a placeholder such as `"None"`.
///
/// Rows that already have a state are left untouched. Returns the number of
/// rows that gained a state.
pub fn apply_city_state_split(table: &mut Table) -> Result<usize> {
    let city_idx = column_index(table, CITY)?;
    let state_idx = column_index(table, STATE)?;

    let mut split = 0usize;
    for (row_idx, row) in table.rows.iter_mut().enumerate() {
        if row.cells[state_idx].as_text().is_some_and(|state| !is_sentinel(state)) {
            continue;
        }
        let record = split_city_state(row.cells[city_idx].as_text());
        if record.state.is_some() {
            split += 1;
        } else {
            trace!(row = row_idx, "no state token in city line");
        }
        row.cells[city_idx] = CellValue::from_option(record.city);
        row.cells[state_idx] = CellValue::from_option(record.state);
    }
    Ok(split)
}

pub(crate) fn column_index(table: &Table, column: &str) -> Result<usize> {
    table
        .column_index(column)
        .ok_or_else(|| TransformError::ColumnNotFound {
            column: column.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(city: Option<&str>, state: Option<&str>) -> AddressRecord {
        AddressRecord {
            city: city.map(str::to_string),
            state: state.map(str::to_string),
        }
    }

    #[test]
    fn splits_on_last_space() {
        assert_eq!(
            split_city_state(Some("Springfield IL")),
            record(Some("Springfield"), Some("IL"))
        );
        assert_eq!(
            split_city_state(Some("New York NY")),
            record(Some("New York"), Some("NY"))
        );
    }

    #[test]
    fn multi_word_city_without_state_is_missplit() {
        assert_eq!(
            split_city_state(Some("New York")),
            record(Some("New"), Some("York"))
        );
    }

    #[test]
    fn single_token_keeps_text_verbatim() {
        assert_eq!(split_city_state(Some("Chicago")), record(Some("Chicago"), None));
        assert_eq!(split_city_state(Some("")), record(Some(""), None));
    }

    #[test]
    fn absent_input_gives_absent_record() {
        assert_eq!(split_city_state(None), record(None, None));
    }

    #[test]
    fn trims_both_halves() {
        assert_eq!(
            split_city_state(Some("Springfield   IL")),
            record(Some("Springfield"), Some("IL"))
        );
        assert_eq!(
            split_city_state(Some("Dover\tDE")),
            record(Some("Dover"), Some("DE"))
        );
    }

    #[test]
    fn trailing_whitespace_leaves_state_absent() {
        assert_eq!(split_city_state(Some("Chicago ")), record(Some("Chicago"), None));
    }

    #[test]
    fn apply_only_touches_rows_without_state() {
        let mut table = Table::from_rows(
            &[CITY, STATE],
            vec![
                vec![Some("Springfield IL"), None],
                vec![Some("Kansas City"), Some("MO")],
                vec![Some("Chicago"), None],
                vec![None, None],
            ],
        )
        .unwrap();

        let split = apply_city_state_split(&mut table).unwrap();

        assert_eq!(split, 1);
        assert_eq!(table.value(0, CITY), Some(&CellValue::text("Springfield")));
        assert_eq!(table.value(0, STATE), Some(&CellValue::text("IL")));
        assert_eq!(table.value(1, CITY), Some(&CellValue::text("Kansas City")));
        assert_eq!(table.value(1, STATE), Some(&CellValue::text("MO")));
        assert_eq!(table.value(2, CITY), Some(&CellValue::text("Chicago")));
        assert_eq!(table.value(2, STATE), Some(&CellValue::Missing));
        assert_eq!(table.value(3, CITY), Some(&CellValue::Missing));
    }

    #[test]
    fn apply_treats_placeholder_state_as_absent() {
        let mut table = Table::from_rows(
            &[CITY, STATE],
            vec![
                vec![Some("Springfield IL"), Some("None")],
                vec![Some("Dover DE"), Some("UNKNOWN")],
                vec![Some("Chicago"), Some("None")],
            ],
        )
        .unwrap();

        let split = apply_city_state_split(&mut table).unwrap();

        assert_eq!(split, 2);
        assert_eq!(table.value(0, CITY), Some(&CellValue::text("Springfield")));
        assert_eq!(table.value(0, STATE), Some(&CellValue::text("IL")));
        assert_eq!(table.value(1, STATE), Some(&CellValue::text("DE")));
        assert_eq!(table.value(2, CITY), Some(&CellValue::text("Chicago")));
        assert_eq!(table.value(2, STATE), Some(&CellValue::Missing));
    }

    #[test]
    fn apply_requires_derived_columns() {
        let mut table = Table::new(vec![CITY.to_string()]);
        let err = apply_city_state_split(&mut table).unwrap_err();
        assert!(matches!(err, TransformError::ColumnNotFound { column } if column == STATE));
    }
}
