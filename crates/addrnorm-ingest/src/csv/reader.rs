//! CSV file reading with a configurable text encoding.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use addrnorm_model::{CellValue, DEFAULT_ENCODING, Row, Table};

use crate::encoding::{decode_bytes, resolve_encoding};
use crate::error::{IngestError, Result};

use super::header::normalize_header;

/// Options for reading a source table.
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// WHATWG label of the file's text encoding.
    pub encoding: String,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            encoding: DEFAULT_ENCODING.to_string(),
        }
    }
}

impl ReadOptions {
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }
}

/// Reads a comma-delimited file with a header row into a [`Table`].
///
/// Blank fields become [`CellValue::Missing`]; every other field is kept
/// verbatim, including surrounding whitespace and placeholder text.
pub fn read_table(path: &Path, options: &ReadOptions) -> Result<Table> {
    let encoding = resolve_encoding(&options.encoding)?;
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let source_name = path.display().to_string();
    let text = decode_bytes(&bytes, encoding, &source_name)?;
    let table = parse_table(&text, &source_name)?;
    debug!(
        path = %path.display(),
        encoding = encoding.name(),
        rows = table.height(),
        columns = table.width(),
        "read source table"
    );
    Ok(table)
}

/// Parses already-decoded CSV text into a [`Table`].
pub fn read_table_from_str(text: &str) -> Result<Table> {
    parse_table(text, "<memory>")
}

fn parse_table(text: &str, source_name: &str) -> Result<Table> {
    let csv_error = |source| IngestError::CsvParse {
        source_name: source_name.to_string(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());
    let headers = reader.headers().map_err(csv_error)?.clone();
    if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
        return Err(IngestError::EmptyCsv {
            source_name: source_name.to_string(),
        });
    }

    let mut table = Table::new(headers.iter().map(normalize_header).collect());
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let cells = record.iter().map(CellValue::from_field).collect();
        table.push_row(Row::new(cells))?;
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_keeps_rows_in_order() {
        let table = read_table_from_str("A,B\n1,x\n2,\n3,z\n").unwrap();
        assert_eq!(table.columns, vec!["A", "B"]);
        assert_eq!(table.height(), 3);
        assert_eq!(table.value(0, "A"), Some(&CellValue::text("1")));
        assert_eq!(table.value(1, "B"), Some(&CellValue::Missing));
        assert_eq!(table.value(2, "A"), Some(&CellValue::text("3")));
    }

    #[test]
    fn test_read_keeps_field_whitespace_and_placeholders() {
        let table = read_table_from_str("A,B\n  padded ,None\n").unwrap();
        assert_eq!(table.value(0, "A"), Some(&CellValue::text("  padded ")));
        assert_eq!(table.value(0, "B"), Some(&CellValue::text("None")));
    }

    #[test]
    fn test_read_quoted_commas() {
        let table = read_table_from_str("A,B\n\"SMITH, JOHN\",1\n").unwrap();
        assert_eq!(table.value(0, "A"), Some(&CellValue::text("SMITH, JOHN")));
    }

    #[test]
    fn test_read_empty_input() {
        let err = read_table_from_str("").unwrap_err();
        assert!(matches!(err, IngestError::EmptyCsv { .. }));
    }

    #[test]
    fn test_read_ragged_row_is_an_error() {
        let err = read_table_from_str("A,B\n1,2,3\n").unwrap_err();
        assert!(matches!(err, IngestError::CsvParse { .. }));
    }

    #[test]
    fn test_read_header_only() {
        let table = read_table_from_str("A,B\n").unwrap();
        assert_eq!(table.width(), 2);
        assert_eq!(table.height(), 0);
    }
}
