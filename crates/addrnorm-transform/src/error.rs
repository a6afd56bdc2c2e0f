//! Error types for the normalization pipeline.

use thiserror::Error;

use addrnorm_model::ModelError;

/// Failures that stop the pipeline. Per-row anomalies never surface here;
/// they degrade to missing values instead.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The input lacks source columns the field mapper reads.
    #[error("source table is missing required columns: {}", missing.join(", "))]
    SchemaMismatch { missing: Vec<String> },

    /// A stage ran before the column it reads was derived.
    #[error("column '{column}' not found; stages must run in pipeline order")]
    ColumnNotFound { column: String },

    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, TransformError>;
