//! CSV reading utilities.

mod header;
mod reader;

pub use header::normalize_header;
pub use reader::{ReadOptions, read_table, read_table_from_str};
