use std::path::PathBuf;

use serde::Serialize;

use addrnorm_model::{NormalizeOptions, PipelineConfig};
use addrnorm_transform::NormalizeStats;

/// Everything needed to clean one file.
#[derive(Debug, Clone)]
pub struct CleanRequest {
    pub input: PathBuf,
    /// Destination file; `None` means `cleaned_data.csv` next to the input.
    pub output: Option<PathBuf>,
    pub config: PipelineConfig,
    /// Run every stage but write nothing.
    pub dry_run: bool,
}

impl CleanRequest {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            config: PipelineConfig::default(),
            dry_run: false,
        }
    }

    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Outcome of a cleaning run, printed as a summary and optionally saved as
/// JSON.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub input: PathBuf,
    /// Where the cleaned table was written; absent on a dry run.
    pub output: Option<PathBuf>,
    pub encoding: String,
    pub options: NormalizeOptions,
    pub stats: NormalizeStats,
    pub output_columns: Vec<String>,
    pub duration_ms: u64,
    pub dry_run: bool,
}
