// SidSort - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; all errors preserve the causal
// chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Run-level errors
// ---------------------------------------------------------------------------

/// Fatal errors that abort a sorting run before or during processing.
///
/// Per-file problems (unrecognised extension, malformed filename, copy
/// failure) never surface here; they are converted to skip-and-continue
/// outcomes inside the pipeline.
#[derive(Debug)]
pub enum SortError {
    /// The input root does not exist.
    InputRootNotFound { path: PathBuf },

    /// The input root exists but is not a directory.
    InputRootNotADirectory { path: PathBuf },

    /// The output root could not be created.
    OutputRootUncreatable { path: PathBuf, source: io::Error },

    /// I/O error with path and operation context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputRootNotFound { path } => {
                write!(f, "Input directory '{}' does not exist", path.display())
            }
            Self::InputRootNotADirectory { path } => {
                write!(f, "Input path '{}' is not a directory", path.display())
            }
            Self::OutputRootUncreatable { path, source } => {
                write!(
                    f,
                    "Cannot create output directory '{}': {source}",
                    path.display()
                )
            }
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for SortError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OutputRootUncreatable { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Extraction errors
// ---------------------------------------------------------------------------

/// Errors from the per-variant filename metadata extractor.
///
/// Every variant is fatal for the current file only: the pipeline records
/// the filename in the skip report and continues with the next file.
#[derive(Debug)]
pub enum ExtractError {
    /// The filename is shorter than the variant's fixed offsets require.
    TooShort { filename: String, needed: usize },

    /// A date field at the variant's fixed offsets is not numeric.
    BadDigits {
        filename: String,
        field: &'static str,
        raw: String,
    },

    /// An underscore-delimited filename has fewer tokens than the variant
    /// requires.
    MissingTokens {
        filename: String,
        found: usize,
        needed: usize,
    },

    /// The filename matched no known format variant; extraction was called
    /// anyway.
    Unclassified { filename: String },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { filename, needed } => {
                write!(
                    f,
                    "filename '{filename}' is too short (needs at least {needed} characters)"
                )
            }
            Self::BadDigits {
                filename,
                field,
                raw,
            } => {
                write!(f, "filename '{filename}': {field} field '{raw}' is not numeric")
            }
            Self::MissingTokens {
                filename,
                found,
                needed,
            } => write!(
                f,
                "filename '{filename}' has {found} underscore-delimited tokens, needs {needed}"
            ),
            Self::Unclassified { filename } => {
                write!(f, "filename '{filename}' matches no known format")
            }
        }
    }
}

impl std::error::Error for ExtractError {}

/// Convenience type alias for run-level results.
pub type Result<T> = std::result::Result<T, SortError>;
