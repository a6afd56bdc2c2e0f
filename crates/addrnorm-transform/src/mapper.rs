//! Field mapping from the fixed source layout to semantic columns.
//!
//! | derived   | source                                    |
//! |-----------|-------------------------------------------|
//! | `name`    | 1st line, verbatim                        |
//! | `address` | 2nd, 3rd and 4th lines joined with `", "` |
//! | `city`    | 5th line, trimmed                         |
//! | `state`   | 6th line, verbatim                        |
//! | `zip`     | sorting ZIP, verbatim                     |
//! | `cusip`   | CUSIP, verbatim                           |
//!
//! Source columns stay in the table; the projector removes them at the end.

use addrnorm_model::columns::{
    ADDRESS, CITY, IDENTIFIER, NAME, NAME_LINE_1, NAME_LINE_2, NAME_LINE_3, NAME_LINE_4,
    NAME_LINE_5, NAME_LINE_6, REQUIRED_SOURCE_COLUMNS, SORTING_ZIP, SOURCE_CUSIP, STATE, ZIP,
};
use addrnorm_model::{CellValue, Table};

use crate::error::{Result, TransformError};

/// Separator between address lines in the derived `address` column.
pub const ADDRESS_SEPARATOR: &str = ", ";

/// Joins address lines, treating missing lines as empty strings.
///
/// ```
/// use addrnorm_model::CellValue;
/// use addrnorm_transform::mapper::join_address;
///
/// let lines = [CellValue::text("100 MAIN ST"), CellValue::Missing, CellValue::Missing];
/// assert_eq!(join_address(&lines), "100 MAIN ST, , ");
/// ```
pub fn join_address<'a>(lines: impl IntoIterator<Item = &'a CellValue>) -> String {
    lines
        .into_iter()
        .map(|line| line.as_text().unwrap_or_default())
        .collect::<Vec<_>>()
        .join(ADDRESS_SEPARATOR)
}

fn trimmed(cell: &CellValue) -> CellValue {
    match cell {
        CellValue::Text(value) => CellValue::text(value.trim()),
        CellValue::Missing => CellValue::Missing,
    }
}

/// Adds the derived semantic columns to a source table.
///
/// Fails with [`TransformError::SchemaMismatch`] when any required source
/// column is absent; no column is ever invented.
pub fn map_fields(mut table: Table) -> Result<Table> {
    let missing: Vec<String> = REQUIRED_SOURCE_COLUMNS
        .iter()
        .filter(|column| !table.has_column(column))
        .map(|column| (*column).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(TransformError::SchemaMismatch { missing });
    }

    let name = copied(&table, NAME_LINE_1, CellValue::clone)?;
    let address: Vec<CellValue> = {
        let line2 = table.column_values(NAME_LINE_2)?;
        let line3 = table.column_values(NAME_LINE_3)?;
        let line4 = table.column_values(NAME_LINE_4)?;
        line2
            .into_iter()
            .zip(line3)
            .zip(line4)
            .map(|((a, b), c)| CellValue::Text(join_address([a, b, c])))
            .collect()
    };
    let city = copied(&table, NAME_LINE_5, trimmed)?;
    let state = copied(&table, NAME_LINE_6, CellValue::clone)?;
    let zip = copied(&table, SORTING_ZIP, CellValue::clone)?;
    let identifier = copied(&table, SOURCE_CUSIP, CellValue::clone)?;

    table.set_column(NAME, name)?;
    table.set_column(ADDRESS, address)?;
    table.set_column(CITY, city)?;
    table.set_column(STATE, state)?;
    table.set_column(ZIP, zip)?;
    table.set_column(IDENTIFIER, identifier)?;
    Ok(table)
}

fn copied(
    table: &Table,
    column: &str,
    map: fn(&CellValue) -> CellValue,
) -> Result<Vec<CellValue>> {
    Ok(table.column_values(column)?.into_iter().map(map).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use addrnorm_model::columns::NAME_LINE_7;

    fn source(row: Vec<Option<&str>>) -> Table {
        Table::from_rows(
            &[
                NAME_LINE_1,
                NAME_LINE_2,
                NAME_LINE_3,
                NAME_LINE_4,
                NAME_LINE_5,
                NAME_LINE_6,
                NAME_LINE_7,
                SORTING_ZIP,
                SOURCE_CUSIP,
            ],
            vec![row],
        )
        .unwrap()
    }

    #[test]
    fn maps_every_semantic_column() {
        let table = source(vec![
            Some(" ACME CORP "),
            Some("100 MAIN ST"),
            Some("SUITE 4"),
            Some("PO BOX 9"),
            Some("  Springfield IL  "),
            Some(" IL"),
            Some("ignored"),
            Some("62701"),
            Some("CU1"),
        ]);

        let mapped = map_fields(table).unwrap();

        assert_eq!(mapped.value(0, NAME), Some(&CellValue::text(" ACME CORP ")));
        assert_eq!(
            mapped.value(0, ADDRESS),
            Some(&CellValue::text("100 MAIN ST, SUITE 4, PO BOX 9"))
        );
        assert_eq!(mapped.value(0, CITY), Some(&CellValue::text("Springfield IL")));
        assert_eq!(mapped.value(0, STATE), Some(&CellValue::text(" IL")));
        assert_eq!(mapped.value(0, ZIP), Some(&CellValue::text("62701")));
        assert_eq!(mapped.value(0, IDENTIFIER), Some(&CellValue::text("CU1")));
    }

    #[test]
    fn missing_lines_do_not_blank_the_address() {
        let table = source(vec![
            Some("ACME"),
            None,
            Some("100 MAIN ST"),
            None,
            None,
            None,
            None,
            None,
            None,
        ]);

        let mapped = map_fields(table).unwrap();

        assert_eq!(mapped.value(0, ADDRESS), Some(&CellValue::text(", 100 MAIN ST, ")));
        assert_eq!(mapped.value(0, CITY), Some(&CellValue::Missing));
        assert_eq!(mapped.value(0, IDENTIFIER), Some(&CellValue::Missing));
    }

    #[test]
    fn missing_source_columns_are_a_schema_mismatch() {
        let table =
            Table::from_rows(&[NAME_LINE_1, SOURCE_CUSIP], vec![vec![Some("A"), Some("B")]])
                .unwrap();
        let err = map_fields(table).unwrap_err();
        match err {
            TransformError::SchemaMismatch { missing } => {
                assert_eq!(missing.len(), 6);
                assert_eq!(missing[0], NAME_LINE_2);
                assert!(missing.contains(&SORTING_ZIP.to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
