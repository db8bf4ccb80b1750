// SidSort - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no UI
// dependencies. These types are the shared vocabulary across all layers.

use std::path::PathBuf;

// =============================================================================
// Format variant
// =============================================================================

/// The legacy filename conventions this tool knows how to reparse,
/// determined purely from the filename's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatVariant {
    /// `.dat` files named `YYYYMMDD...` from the original receiver software.
    LegacyDat,

    /// `.spd` files in Colin Clements' convention, with either a 2-digit or
    /// 4-digit year after a 2-character station prefix.
    ColinClementsSpd,

    /// `.xml` exports from the Staribus multi-channel logger, underscore
    /// delimited with an 8-digit date token.
    StaribusXml,

    /// `.csv` files already named to the repository convention; relocated
    /// without renaming.
    GenericCsv,

    /// Catch-all for extensions this tool does not handle.
    Unrecognized,
}

impl FormatVariant {
    /// Human-readable label for messages and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::LegacyDat => "legacy .dat",
            Self::ColinClementsSpd => "Colin Clements .spd",
            Self::StaribusXml => "Staribus .xml",
            Self::GenericCsv => "generic .csv",
            Self::Unrecognized => "unrecognised",
        }
    }
}

impl std::fmt::Display for FormatVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Observation date
// =============================================================================

/// Calendar date of an observation, sliced from a filename.
///
/// The extractor parses the digit fields but does not range-check them
/// (a `month` of 13 flows through unvalidated, exactly as the filenames
/// themselves are trusted).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservationDate {
    /// 4-digit year (century-completed for 2-digit source fields).
    pub year: u16,

    /// 2-digit month as written in the filename.
    pub month: u8,

    /// 2-digit day as written in the filename.
    pub day: u8,
}

impl ObservationDate {
    /// The 2-digit year derivative used in directory names.
    pub fn year2(&self) -> u16 {
        self.year % 100
    }

    /// The 8-digit `YYYYMMDD` block used in canonical filenames.
    pub fn date_block(&self) -> String {
        format!("{:04}{:02}{:02}", self.year, self.month, self.day)
    }
}

// =============================================================================
// Extraction output
// =============================================================================

/// Per-variant filename fragments carried from extraction into the
/// destination-name synthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameParts {
    /// LegacyDat needs nothing beyond the date.
    Dat,

    /// Century-completed spd stem: the original filename minus its leading
    /// 2 characters and trailing 4-character extension, prefixed with "20"
    /// when the source year was 2-digit.  Always begins with the date digits.
    Spd { stem: String },

    /// Staribus tokens preserved verbatim in the output name.
    Xml {
        /// token[2]: the 8-digit date block.
        date_token: String,
        /// token[3] minus its own 4-character extension (the session id).
        session: String,
        /// token[0]: instrument identifier.
        instrument: String,
        /// token[1]: channel/record identifier.
        channel: String,
    },

    /// GenericCsv keeps the original filename unchanged.
    Csv { original: String },
}

/// Everything the extractor pulls out of one filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub date: ObservationDate,
    pub parts: NameParts,
}

// =============================================================================
// Destination
// =============================================================================

/// Computed destination for one file: the date-derived directory under the
/// output root, and the canonical filename within it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationSpec {
    pub directory: PathBuf,
    pub filename: String,
}

impl DestinationSpec {
    /// Full destination path (directory joined with filename).
    pub fn full_path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }
}

// =============================================================================
// Run configuration
// =============================================================================

/// Explicit run-configuration value object shared by the CLI and GUI.
/// Set once before a run starts; read-only during it.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Root of the directory tree holding the raw receiver files.
    pub input_root: PathBuf,

    /// Root under which the renamed copies are filed.
    pub output_root: PathBuf,

    /// Observer name substituted into every output filename for this run.
    pub observer: String,
}

impl RunConfig {
    pub fn new(
        input_root: impl Into<PathBuf>,
        output_root: impl Into<PathBuf>,
        observer: impl Into<String>,
    ) -> Self {
        Self {
            input_root: input_root.into(),
            output_root: output_root.into(),
            observer: observer.into(),
        }
    }
}

// =============================================================================
// Run summary
// =============================================================================

/// Summary statistics for a completed sorting run.
#[derive(Debug, Clone, Default)]
pub struct SortSummary {
    /// Files copied to a new destination this run.
    pub files_copied: usize,

    /// Files skipped (unrecognised extension or extraction failure) and
    /// recorded in the skip report.
    pub files_skipped: usize,

    /// Files whose destination already existed; left untouched.
    pub already_existing: usize,

    /// Non-fatal warnings accumulated during the run (inaccessible entries,
    /// per-file copy failures, report-write failures).
    pub warnings: Vec<String>,

    /// Wall-clock run duration.
    pub duration: std::time::Duration,
}

// =============================================================================
// Progress events
// =============================================================================

/// Per-file progress events delivered to the caller's callback during a run.
/// The CLI prints them; the GUI appends them to its message pane.
#[derive(Debug, Clone)]
pub enum SortEvent {
    /// A file was copied to its canonical destination.
    Copied { source: PathBuf, dest: PathBuf },

    /// The destination already existed; the file was left untouched.
    AlreadyExists { dest: PathBuf },

    /// The file was skipped and recorded in the skip report.
    Skipped { file: String, reason: String },

    /// A non-fatal warning occurred.
    Warning { message: String },

    /// The skipped-file report was written at run end.
    ReportWritten { path: PathBuf },
}
