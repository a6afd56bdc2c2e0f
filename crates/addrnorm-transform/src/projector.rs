//! Final column projection.

use tracing::debug;

use addrnorm_model::columns::DROPPED_COLUMNS;
use addrnorm_model::{NormalizeOptions, Table};

use crate::error::Result;

/// Removes raw and intermediate columns and orders the rest into the output
/// schema. Values are not touched.
///
/// Columns that are neither dropped nor part of the schema are discarded as
/// well, so the result always has exactly [`NormalizeOptions::output_columns`].
pub fn project_output(mut table: Table, options: &NormalizeOptions) -> Result<Table> {
    let schema = options.output_columns();
    let dropped = table.drop_columns(DROPPED_COLUMNS);
    let extra: Vec<&str> = table
        .columns
        .iter()
        .map(String::as_str)
        .filter(|column| !schema.contains(column))
        .collect();
    debug!(
        dropped = dropped.len(),
        extra = extra.len(),
        "projecting output columns"
    );
    if extra.is_empty() && table.columns.iter().map(String::as_str).eq(schema.iter().copied()) {
        return Ok(table);
    }
    Ok(table.select_columns(schema)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use addrnorm_model::CellValue;
    use addrnorm_model::columns::{
        ADDRESS, CITY, IDENTIFIER, NAME, NAME_LINE_1, OUTPUT_COLUMNS, SOURCE_CUSIP, STATE, ZIP,
        ZIP4, ZIP5,
    };

    fn mapped() -> Table {
        Table::from_rows(
            &[
                NAME_LINE_1,
                SOURCE_CUSIP,
                "EXTRA",
                NAME,
                ADDRESS,
                CITY,
                STATE,
                ZIP,
                IDENTIFIER,
                ZIP5,
                ZIP4,
            ],
            vec![vec![
                Some("ACME"),
                Some("CU1"),
                Some("x"),
                Some("ACME"),
                Some("1 MAIN, , "),
                Some("Springfield"),
                Some("IL"),
                Some("627011234"),
                Some("CU1"),
                Some("62701"),
                Some("1234"),
            ]],
        )
        .unwrap()
    }

    #[test]
    fn keeps_exactly_the_output_schema() {
        let projected = project_output(mapped(), &NormalizeOptions::default()).unwrap();
        assert_eq!(projected.columns, OUTPUT_COLUMNS);
        assert_eq!(projected.value(0, ZIP5), Some(&CellValue::text("62701")));
        assert!(!projected.has_column(ZIP4));
        assert!(!projected.has_column("EXTRA"));
    }

    #[test]
    fn keep_zip4_retains_extension() {
        let options = NormalizeOptions::new().with_keep_zip4(true);
        let projected = project_output(mapped(), &options).unwrap();
        assert_eq!(projected.columns.last().map(String::as_str), Some(ZIP4));
        assert_eq!(projected.value(0, ZIP4), Some(&CellValue::text("1234")));
    }
}
