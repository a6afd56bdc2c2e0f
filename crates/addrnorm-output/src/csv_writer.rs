use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use tracing::debug;

use addrnorm_model::Table;

use crate::error::{OutputError, Result};

/// Writes `table` as comma-delimited UTF-8 text to `path`, replacing any
/// existing file.
pub fn write_table(table: &Table, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_table_to(table, file)?;
    debug!(
        path = %path.display(),
        rows = table.height(),
        columns = table.width(),
        "wrote output table"
    );
    Ok(())
}

/// Writes `table` to any writer.
pub fn write_table_to<W: Write>(table: &Table, writer: W) -> Result<()> {
    let mut csv = WriterBuilder::new().has_headers(false).from_writer(writer);
    csv.write_record(&table.columns)?;
    for row in table.iter_rows() {
        csv.write_record(row.cells.iter().map(|cell| cell.as_text().unwrap_or_default()))?;
    }
    csv.flush()?;
    Ok(())
}

/// Renders `table` to a string; handy for previews and tests.
pub fn table_to_csv_string(table: &Table) -> Result<String> {
    let mut buffer = Vec::new();
    write_table_to(table, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_cells_are_empty_fields() {
        let table = Table::from_rows(
            &["name", "state"],
            vec![vec![Some("ACME"), None], vec![None, Some("IL")]],
        )
        .unwrap();
        let rendered = table_to_csv_string(&table).unwrap();
        assert_eq!(rendered, "name,state\nACME,\n,IL\n");
    }

    #[test]
    fn values_with_commas_are_quoted() {
        let table =
            Table::from_rows(&["address"], vec![vec![Some("100 MAIN ST, , ")]]).unwrap();
        let rendered = table_to_csv_string(&table).unwrap();
        assert_eq!(rendered, "address\n\"100 MAIN ST, , \"\n");
    }

    #[test]
    fn empty_table_writes_header_only() {
        let table = Table::new(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(table_to_csv_string(&table).unwrap(), "a,b\n");
    }
}
