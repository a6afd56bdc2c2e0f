//! Data model for the address normalizer.
//!
//! - [`Table`], [`Row`] and [`CellValue`]: the in-memory table threaded through
//!   every pipeline stage
//! - [`columns`]: fixed source and output column names
//! - [`options`]: run configuration

pub mod columns;
pub mod error;
pub mod options;
pub mod table;

pub use error::{ModelError, Result};
pub use options::{DEFAULT_ENCODING, NormalizeOptions, PipelineConfig, ZipValidation};
pub use table::{CellValue, Row, Table};
