//! Fixed column names of the source layout and the cleaned output.

/// Positional name/address lines as they appear in the source header.
pub const NAME_LINE_1: &str = "1ST LINE OF NAME & ADDRESS";
pub const NAME_LINE_2: &str = "2ND LINE OF NAME & ADDRESS";
pub const NAME_LINE_3: &str = "3RD LINE OF NAME & ADDRESS";
pub const NAME_LINE_4: &str = "4TH LINE OF NAME & ADDRESS";
pub const NAME_LINE_5: &str = "5TH LINE OF NAME & ADDRESS";
pub const NAME_LINE_6: &str = "6TH LINE OF NAME & ADDRESS";
pub const NAME_LINE_7: &str = "7TH LINE OF NAME & ADDRESS";
pub const SORTING_ZIP: &str = "ZIP CODE FOR SORTING";
pub const SOURCE_CUSIP: &str = "CUSIP";

pub const NAME: &str = "name";
pub const ADDRESS: &str = "address";
pub const CITY: &str = "city";
pub const STATE: &str = "state";
/// Intermediate copy of the sorting ZIP; never part of the output.
pub const ZIP: &str = "zip";
/// Security identifier carried through from the source.
pub const IDENTIFIER: &str = "cusip";
pub const ZIP5: &str = "5DigitZip";
pub const ZIP4: &str = "Zip+4";

/// Source columns the field mapper reads. All of them must be present.
pub const REQUIRED_SOURCE_COLUMNS: &[&str] = &[
    NAME_LINE_1,
    NAME_LINE_2,
    NAME_LINE_3,
    NAME_LINE_4,
    NAME_LINE_5,
    NAME_LINE_6,
    SORTING_ZIP,
    SOURCE_CUSIP,
];

/// Every raw or intermediate column removed before output.
pub const DROPPED_COLUMNS: &[&str] = &[
    NAME_LINE_1,
    NAME_LINE_2,
    NAME_LINE_3,
    NAME_LINE_4,
    NAME_LINE_5,
    NAME_LINE_6,
    NAME_LINE_7,
    SORTING_ZIP,
    SOURCE_CUSIP,
    ZIP,
    ZIP4,
];

/// Final schema, in output order, when the +4 extension is dropped.
pub const OUTPUT_COLUMNS: &[&str] = &[NAME, ADDRESS, CITY, STATE, IDENTIFIER, ZIP5];

/// Final schema when the +4 extension is retained.
pub const OUTPUT_COLUMNS_WITH_ZIP4: &[&str] =
    &[NAME, ADDRESS, CITY, STATE, IDENTIFIER, ZIP5, ZIP4];

/// Placeholder strings that denote a missing value upstream.
pub const SENTINELS: &[&str] = &["UNKNOWN", "None", ""];
