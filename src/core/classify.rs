// SidSort - core/classify.rs
//
// Format classification from the filename suffix.
//
// The rule is deliberately crude: the last 3 characters of the raw
// filename are the suffix, with no dot handling.  Filenames shorter than
// 3 characters compare their whole name.  Matching is case-sensitive,
// as in the receiver software that produces these files.

use crate::core::model::FormatVariant;

/// Classify a filename into a [`FormatVariant`].
///
/// Pure function; never panics.  Slices that fall off a UTF-8 character
/// boundary (non-ASCII names) map to `Unrecognized`.
pub fn classify(filename: &str) -> FormatVariant {
    let start = filename.len().saturating_sub(3);
    match filename.get(start..) {
        Some("dat") => FormatVariant::LegacyDat,
        Some("spd") => FormatVariant::ColinClementsSpd,
        Some("xml") => FormatVariant::StaribusXml,
        Some("csv") => FormatVariant::GenericCsv,
        _ => FormatVariant::Unrecognized,
    }
}

// =============================================================================
// Tests
// =============================================================================
