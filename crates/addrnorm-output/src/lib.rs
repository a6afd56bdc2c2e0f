//! Output generation for normalized address tables.
//!
//! Writes a header row followed by one record per table row, in order.
//! Missing cells are written as empty fields.

mod csv_writer;
mod error;

pub use csv_writer::{table_to_csv_string, write_table, write_table_to};
pub use error::{OutputError, Result};
