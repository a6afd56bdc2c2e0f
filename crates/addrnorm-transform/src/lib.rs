//! Address table normalization.
//!
//! Turns a messy fixed-layout name/address table into a clean one:
//!
//! - **mapper**: derive `name`, `address`, `city`, `state`, `zip` and `cusip`
//!   from the positional source lines
//! - **normalization**: city/state splitting, ZIP screening and
//!   decomposition, sentinel cleanup
//! - **projector**: reduce the table to the output schema
//! - **pipeline**: run all of the above in order
//!
//! # Example
//!
//! ```ignore
//! use addrnorm_model::NormalizeOptions;
//! use addrnorm_transform::normalize_table;
//!
//! let outcome = normalize_table(source, &NormalizeOptions::default())?;
//! println!("{} rows, {} states split", outcome.stats.rows, outcome.stats.states_split);
//! ```
//!
//! Every stage is a pure function of the table it receives; there is no
//! process-wide state.

mod error;
pub mod mapper;
pub mod normalization;
pub mod pipeline;
pub mod projector;
mod types;

pub use error::{Result, TransformError};
pub use mapper::{join_address, map_fields};
pub use normalization::{
    AddressRecord, ZipRecord, ZipStats, apply_city_state_split, apply_zip_normalization,
    classify_zip, decompose_zip, is_sentinel, is_valid_hyphenated_zip, is_valid_zip,
    normalize_zip, reconcile_sentinels, split_city_state,
};
pub use pipeline::normalize_table;
pub use projector::project_output;
pub use types::{NormalizeOutcome, NormalizeStats};
