//! In-memory table representation.
//!
//! A [`Table`] is an ordered list of column names plus an ordered list of
//! [`Row`]s whose cells are positionally aligned to those columns. Row order is
//! the source order and is never changed by any operation here.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// A single cell: either text or the canonical missing marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    #[default]
    Missing,
}

impl CellValue {
    /// Build a cell from a raw delimited-text field. Blank fields are missing.
    pub fn from_field(raw: &str) -> Self {
        if raw.is_empty() {
            Self::Missing
        } else {
            Self::Text(raw.to_string())
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Wrap an optional string, mapping `None` to [`CellValue::Missing`].
    pub fn from_option(value: Option<String>) -> Self {
        value.map_or(Self::Missing, Self::Text)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            Self::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Option<&str>> for CellValue {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Self::Missing, Self::from)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Row {
    pub cells: Vec<CellValue>,
}

impl Row {
    pub fn new(cells: Vec<CellValue>) -> Self {
        Self { cells }
    }

    pub fn get(&self, index: usize) -> Option<&CellValue> {
        self.cells.get(index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a table from string column names and rows of optional text.
    ///
    /// Mostly useful for fixtures; `None` becomes [`CellValue::Missing`].
    pub fn from_rows<'a, C, R>(columns: &[C], rows: R) -> Result<Self>
    where
        C: AsRef<str>,
        R: IntoIterator<Item = Vec<Option<&'a str>>>,
    {
        let mut table = Self::new(columns.iter().map(|c| c.as_ref().to_string()).collect());
        for row in rows {
            table.push_row(Row::new(row.into_iter().map(CellValue::from).collect()))?;
        }
        Ok(table)
    }

    pub fn push_row(&mut self, row: Row) -> Result<()> {
        if row.cells.len() != self.columns.len() {
            return Err(ModelError::RowArity {
                expected: self.columns.len(),
                actual: row.cells.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cell at `(row, column)`, or `None` when either is out of range.
    pub fn value(&self, row: usize, column: &str) -> Option<&CellValue> {
        let index = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(index))
    }

    /// All cells of one column, in row order.
    pub fn column_values(&self, column: &str) -> Result<Vec<&CellValue>> {
        let index = self
            .column_index(column)
            .ok_or_else(|| ModelError::UnknownColumn(column.to_string()))?;
        Ok(self.rows.iter().map(|row| &row.cells[index]).collect())
    }

    /// Add a column at the end, or replace its values if it already exists.
    pub fn set_column(&mut self, name: &str, values: Vec<CellValue>) -> Result<()> {
        if values.len() != self.rows.len() {
            return Err(ModelError::ColumnLength {
                column: name.to_string(),
                expected: self.rows.len(),
                actual: values.len(),
            });
        }
        match self.column_index(name) {
            Some(index) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.cells[index] = value;
                }
            }
            None => {
                self.columns.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.cells.push(value);
                }
            }
        }
        Ok(())
    }

    /// Remove every listed column that exists. Unknown names are ignored.
    ///
    /// Returns the names that were actually removed.
    pub fn drop_columns(&mut self, names: &[&str]) -> Vec<String> {
        let keep: Vec<bool> = self
            .columns
            .iter()
            .map(|column| !names.contains(&column.as_str()))
            .collect();
        if keep.iter().all(|k| *k) {
            return Vec::new();
        }
        let mut dropped = Vec::new();
        let mut columns = Vec::with_capacity(self.columns.len());
        for (column, keep_it) in self.columns.drain(..).zip(&keep) {
            if *keep_it {
                columns.push(column);
            } else {
                dropped.push(column);
            }
        }
        self.columns = columns;
        for row in &mut self.rows {
            let cells = std::mem::take(&mut row.cells);
            row.cells = cells
                .into_iter()
                .zip(&keep)
                .filter_map(|(cell, keep_it)| keep_it.then_some(cell))
                .collect();
        }
        dropped
    }

    /// Reorder and restrict the table to exactly `names`, in that order.
    pub fn select_columns(&self, names: &[&str]) -> Result<Self> {
        let indices = names
            .iter()
            .map(|name| {
                self.column_index(name)
                    .ok_or_else(|| ModelError::UnknownColumn((*name).to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        let rows = self
            .rows
            .iter()
            .map(|row| Row::new(indices.iter().map(|&i| row.cells[i].clone()).collect()))
            .collect();
        Ok(Self {
            columns: names.iter().map(|name| (*name).to_string()).collect(),
            rows,
        })
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Iterate mutably over every cell in the table.
    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut CellValue> {
        self.rows.iter_mut().flat_map(|row| row.cells.iter_mut())
    }
}
