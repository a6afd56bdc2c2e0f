//! ZIP code screening and decomposition.
//!
//! Normalization runs in two phases:
//!
//! 1. **Screening** ([`classify_zip`]): under [`ZipValidation::Strict`] only
//!    values made entirely of ASCII digits pass. [`ZipValidation::Permissive`]
//!    also lets hyphens through. Everything else, absent values included, is
//!    treated as unknown.
//! 2. **Decomposition** ([`decompose_zip`]): split into a zero-padded 5-digit
//!    code and an optional +4 extension.
//!
//! Strict screening rejects hyphens, so the hyphen branch of decomposition is
//! only reachable under [`ZipValidation::Permissive`].

use serde::{Deserialize, Serialize};
use tracing::trace;

use addrnorm_model::columns::{ZIP, ZIP4, ZIP5};
use addrnorm_model::{CellValue, Table, ZipValidation};

use crate::error::Result;
use crate::normalization::address::column_index;

/// Width of the base ZIP code.
pub const ZIP5_LEN: usize = 5;

/// Length of an unhyphenated ZIP+4 value.
const ZIP9_LEN: usize = 9;

/// A decomposed ZIP value. Both parts are absent for unknown input.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ZipRecord {
    pub zip5: Option<String>,
    pub zip4: Option<String>,
}

/// Counts from applying ZIP normalization to a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ZipStats {
    /// Values that passed screening and were decomposed.
    pub accepted: usize,
    /// Present values rejected by screening.
    pub rejected: usize,
    /// Rows with no ZIP at all.
    pub absent: usize,
}

/// True when `raw` is non-empty and made only of ASCII decimal digits.
pub fn is_valid_zip(raw: &str) -> bool {
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit())
}

/// True when `raw` has at least one ASCII digit and is otherwise made only of
/// digits and hyphens.
pub fn is_valid_hyphenated_zip(raw: &str) -> bool {
    raw.bytes().any(|b| b.is_ascii_digit())
        && raw.bytes().all(|b| b.is_ascii_digit() || b == b'-')
}

/// Screening phase. Returns the value to decompose, or `None` for unknown.
pub fn classify_zip(raw: Option<&str>, validation: ZipValidation) -> Option<&str> {
    match validation {
        ZipValidation::Strict => raw.filter(|value| is_valid_zip(value)),
        ZipValidation::Permissive => raw.filter(|value| is_valid_hyphenated_zip(value)),
    }
}

/// Decomposition phase.
///
/// - With a hyphen: split on the first one; the tail is the +4 verbatim.
/// - Exactly nine characters: first five and last four.
/// - Otherwise the whole value is the base code and there is no +4.
///
/// The base code is left-padded with `'0'` to five characters. Longer values
/// are passed through unpadded and never truncated.
///
/// # Examples
///
/// ```
/// use addrnorm_transform::decompose_zip;
///
/// let record = decompose_zip("123456789");
/// assert_eq!(record.zip5.as_deref(), Some("12345"));
/// assert_eq!(record.zip4.as_deref(), Some("6789"));
///
/// let record = decompose_zip("501");
/// assert_eq!(record.zip5.as_deref(), Some("00501"));
/// assert_eq!(record.zip4, None);
/// ```
pub fn decompose_zip(value: &str) -> ZipRecord {
    let (base, plus4) = if let Some((base, plus4)) = value.split_once('-') {
        (base, Some(plus4))
    } else if value.chars().count() == ZIP9_LEN {
        let split = value
            .char_indices()
            .nth(ZIP5_LEN)
            .map_or(value.len(), |(idx, _)| idx);
        (&value[..split], Some(&value[split..]))
    } else {
        (value, None)
    };
    ZipRecord {
        zip5: Some(pad_zip5(base)),
        zip4: plus4.map(str::to_string),
    }
}

/// Screens and decomposes one raw value.
pub fn normalize_zip(raw: Option<&str>, validation: ZipValidation) -> ZipRecord {
    classify_zip(raw, validation)
        .map(decompose_zip)
        .unwrap_or_default()
}

fn pad_zip5(base: &str) -> String {
    format!("{base:0>width$}", width = ZIP5_LEN)
}

/// Derives the `5DigitZip` and `Zip+4` columns from the intermediate `zip`
/// column.
pub fn apply_zip_normalization(table: &mut Table, validation: ZipValidation) -> Result<ZipStats> {
    let zip_idx = column_index(table, ZIP)?;

    let mut stats = ZipStats::default();
    let mut zip5 = Vec::with_capacity(table.height());
    let mut zip4 = Vec::with_capacity(table.height());
    for (row_idx, row) in table.rows.iter().enumerate() {
        let raw = row.cells[zip_idx].as_text();
        let record = match classify_zip(raw, validation) {
            Some(value) => {
                stats.accepted += 1;
                decompose_zip(value)
            }
            None if raw.is_some() => {
                stats.rejected += 1;
                trace!(row = row_idx, "zip rejected by screening");
                ZipRecord::default()
            }
            None => {
                stats.absent += 1;
                ZipRecord::default()
            }
        };
        zip5.push(CellValue::from_option(record.zip5));
        zip4.push(CellValue::from_option(record.zip4));
    }
    table.set_column(ZIP5, zip5)?;
    table.set_column(ZIP4, zip4)?;
    Ok(stats)
}
