//! Configuration options for address normalization.

use serde::{Deserialize, Serialize};

use crate::columns::{OUTPUT_COLUMNS, OUTPUT_COLUMNS_WITH_ZIP4};

/// Default text encoding label for source files.
pub const DEFAULT_ENCODING: &str = "ISO-8859-1";

/// How raw ZIP values are screened before they are decomposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ZipValidation {
    /// Only values made entirely of decimal digits are decomposed; anything
    /// else becomes missing.
    #[default]
    Strict,
    /// Digits and hyphens pass, so hyphenated `12345-6789` forms are split.
    /// Values with any other character still become missing.
    Permissive,
}

/// Options controlling the row-level transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NormalizeOptions {
    pub zip_validation: ZipValidation,
    /// Keep the `Zip+4` column in the output instead of dropping it.
    pub keep_zip4: bool,
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_zip_validation(mut self, validation: ZipValidation) -> Self {
        self.zip_validation = validation;
        self
    }

    pub fn with_keep_zip4(mut self, keep: bool) -> Self {
        self.keep_zip4 = keep;
        self
    }

    /// Output schema implied by these options.
    pub fn output_columns(&self) -> &'static [&'static str] {
        if self.keep_zip4 {
            OUTPUT_COLUMNS_WITH_ZIP4
        } else {
            OUTPUT_COLUMNS
        }
    }
}

/// Full configuration of one cleaning run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub normalize: NormalizeOptions,
    /// Text encoding label of the source file (any WHATWG label).
    pub encoding: String,
    /// Whether a person is driving the run and should see a summary.
    ///
    /// The transform never waits on input regardless of this flag.
    pub interactive_io: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            normalize: NormalizeOptions::default(),
            encoding: DEFAULT_ENCODING.to_string(),
            interactive_io: true,
        }
    }
}

impl PipelineConfig {
    /// Strict ZIP screening, +4 dropped. Matches the reference cleaning run.
    pub fn strict() -> Self {
        Self::default()
    }

    /// Looser variant that splits hyphenated ZIPs and keeps the +4 column.
    pub fn permissive() -> Self {
        Self {
            normalize: NormalizeOptions::new()
                .with_zip_validation(ZipValidation::Permissive)
                .with_keep_zip4(true),
            ..Self::default()
        }
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    pub fn with_interactive_io(mut self, interactive: bool) -> Self {
        self.interactive_io = interactive;
        self
    }
}
