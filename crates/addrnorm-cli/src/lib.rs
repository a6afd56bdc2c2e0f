//! Library side of the `addrnorm` command: run orchestration, logging setup
//! and terminal summaries.

pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;

pub use commands::{default_output_path, run_clean, run_columns, write_report};
pub use types::{CleanRequest, RunReport};
