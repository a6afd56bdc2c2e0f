//! CSV header normalization.

/// Normalizes a header value: trims, drops a stray BOM and collapses runs of
/// internal whitespace to one space.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}
