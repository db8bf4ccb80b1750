// SidSort - core/naming.rs
//
// Destination path and canonical filename synthesis.
//
// One structural invariant holds for every variant: the destination
// directory is always <outputRoot>/<year4>/<yy><mm>/<yy><mm><dd>, built
// from the extracted date regardless of how that date was sliced out of
// the filename.

use crate::core::model::{DestinationSpec, Extraction, NameParts, ObservationDate};
use std::path::{Path, PathBuf};

/// The date-derived directory under `out_root`:
/// `<out_root>/<year4>/<yy><mm>/<yy><mm><dd>`.
pub fn date_directory(out_root: &Path, date: &ObservationDate) -> PathBuf {
    let yy = date.year2();
    out_root
        .join(format!("{:04}", date.year))
        .join(format!("{yy:02}{:02}", date.month))
        .join(format!("{yy:02}{:02}{:02}", date.month, date.day))
}

/// Build the full destination (directory + canonical filename) for one
/// extracted file.  Pure computation over already-extracted fields.
///
/// Canonical names by variant:
/// - LegacyDat:        `UT<YYYYMMDD>_VLF_<observer>.dat`
/// - ColinClementsSpd: `UT<stem>_VLF_<observer>.spd` (the stem already
///   begins with the century-completed date digits, so no date block is
///   repeated)
/// - StaribusXml:      `UT<date>_<session>_<instrument>_<channel>_VLF_<observer>.xml`
/// - GenericCsv:       original filename unchanged (relocated only)
pub fn synthesize(out_root: &Path, extraction: &Extraction, observer: &str) -> DestinationSpec {
    let directory = date_directory(out_root, &extraction.date);
    let filename = match &extraction.parts {
        NameParts::Dat => format!("UT{}_VLF_{observer}.dat", extraction.date.date_block()),
        NameParts::Spd { stem } => format!("UT{stem}_VLF_{observer}.spd"),
        NameParts::Xml {
            date_token,
            session,
            instrument,
            channel,
        } => format!("UT{date_token}_{session}_{instrument}_{channel}_VLF_{observer}.xml"),
        NameParts::Csv { original } => original.clone(),
    };
    DestinationSpec {
        directory,
        filename,
    }
}

// =============================================================================
// Tests
// =============================================================================
