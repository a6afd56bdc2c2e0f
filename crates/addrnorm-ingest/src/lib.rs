//! Source data ingestion for the address normalizer.
//!
//! Loads a delimited text file in a configurable encoding into an
//! [`addrnorm_model::Table`].
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use addrnorm_ingest::{ReadOptions, read_table};
//!
//! let options = ReadOptions::default().with_encoding("ISO-8859-1");
//! let table = read_table(Path::new("IBNmessy.csv"), &options)?;
//! ```

mod csv;
mod encoding;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use self::csv::{ReadOptions, normalize_header, read_table, read_table_from_str};

// === Encoding ===
pub use encoding::{decode_bytes, resolve_encoding};
