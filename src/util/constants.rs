// SidSort - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "SidSort";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Repository convention
// =============================================================================

/// Observer names known to the VLF data repository.  The GUI combo box is
/// restricted to this set; the CLI accepts any free-text observer but
/// defaults to the first entry.
pub const OBSERVER_NAMES: &[&str] = &["JCook", "CClements", "ALutley", "AThomas"];

/// Name of the skipped-file report written under the input root at the end
/// of a run.  Only created when at least one file was skipped.
pub const SKIP_REPORT_FILE_NAME: &str = "skipreport.log";

// =============================================================================
// Traversal limits
// =============================================================================

/// Hard upper bound on directory recursion depth during the input walk.
/// Receiver archives are shallow; this only guards against pathological
/// trees (e.g. symlink-free but extremely deep mirrors).
pub const MAX_SCAN_DEPTH: usize = 50;

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG nor --debug is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";
