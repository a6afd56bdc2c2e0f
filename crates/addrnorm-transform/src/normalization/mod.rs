//! Value-level normalization functions and their table-wide application.
//!
//! - **address**: splitting a combined "city state" string
//! - **zip**: ZIP screening and 5-digit / +4 decomposition
//! - **sentinel**: placeholder strings to the missing marker

pub mod address;
pub mod sentinel;
pub mod zip;

pub use address::{AddressRecord, apply_city_state_split, split_city_state};
pub use sentinel::{is_sentinel, reconcile_sentinels};
pub use zip::{
    ZipRecord, ZipStats, apply_zip_normalization, classify_zip, decompose_zip,
    is_valid_hyphenated_zip, is_valid_zip, normalize_zip,
};
