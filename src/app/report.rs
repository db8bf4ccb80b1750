// SidSort - app/report.rs
//
// Skipped-file accumulator and flat-text report writer.
//
// Scope is one run: cleared state at construction, filenames recorded as
// the pipeline rejects them, written once at run end.  The report is the
// only persistent record of skipped files; there is no database or index.

use crate::util::constants;
use crate::util::error::{Result, SortError};
use std::path::{Path, PathBuf};

/// Accumulates the filenames the classifier marked Unrecognized or the
/// extractor failed on.
#[derive(Debug, Default)]
pub struct SkipReport {
    skipped: Vec<String>,
}

impl SkipReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one skipped filename.
    pub fn record(&mut self, filename: &str) {
        self.skipped.push(filename.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn len(&self) -> usize {
        self.skipped.len()
    }

    /// The recorded filenames, in walk order.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// Write the report under `input_root` as one filename per line.
    ///
    /// No file is created when nothing was skipped; returns the report
    /// path when one was written.
    pub fn write(&self, input_root: &Path) -> Result<Option<PathBuf>> {
        if self.skipped.is_empty() {
            return Ok(None);
        }
        let path = input_root.join(constants::SKIP_REPORT_FILE_NAME);
        std::fs::write(&path, self.skipped.join("\n")).map_err(|source| SortError::Io {
            path: path.clone(),
            operation: "skip report write",
            source,
        })?;
        Ok(Some(path))
    }
}

// =============================================================================
// Tests
// =============================================================================
