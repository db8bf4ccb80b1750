// SidSort - app/sort.rs
//
// The sorting run: walk the input tree and, for each file,
// classify -> extract -> synthesize -> place.
//
// Single-threaded and synchronous: one file is processed fully before the
// next.  Per-file problems are converted to skip-and-continue outcomes;
// only environment-level preconditions (input root missing, output root
// uncreatable) abort the run, and they abort it before any file is
// touched.

use crate::app::report::SkipReport;
use crate::core::classify::classify;
use crate::core::extract::extract;
use crate::core::model::{FormatVariant, RunConfig, SortEvent, SortSummary};
use crate::core::naming::synthesize;
use crate::platform;
use crate::util::constants;
use crate::util::error::{Result, SortError};
use std::time::Instant;

/// Execute one sorting run.
///
/// # Progress reporting
/// `on_event` is called once per per-file outcome (copied, already
/// exists, skipped, warning) and once if the skip report is written.  The
/// callback should be cheap; it is called on the caller's thread.
///
/// # Idempotence
/// Rerunning against the same roots copies nothing: every destination
/// already exists and is reported as such.  The skip report file itself
/// is ignored by the walk so a rerun does not re-ingest it.
pub fn run_sort<F>(config: &RunConfig, mut on_event: F) -> Result<SortSummary>
where
    F: FnMut(&SortEvent),
{
    let started = Instant::now();

    // --- Pre-flight validation ---
    // fs::metadata rather than Path::is_dir so a missing root and a root
    // that is a plain file produce distinct errors.
    match std::fs::metadata(&config.input_root) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            return Err(SortError::InputRootNotADirectory {
                path: config.input_root.clone(),
            })
        }
        Err(_) => {
            return Err(SortError::InputRootNotFound {
                path: config.input_root.clone(),
            })
        }
    }
    std::fs::create_dir_all(&config.output_root).map_err(|source| {
        SortError::OutputRootUncreatable {
            path: config.output_root.clone(),
            source,
        }
    })?;

    tracing::debug!(
        input = %config.input_root.display(),
        output = %config.output_root.display(),
        observer = %config.observer,
        "Sort starting"
    );

    let mut summary = SortSummary::default();
    let mut report = SkipReport::new();

    let walker = walkdir::WalkDir::new(&config.input_root)
        .max_depth(constants::MAX_SCAN_DEPTH)
        .follow_links(false);

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(e) => {
                // Inaccessible entry: non-fatal, record warning.
                let path_str = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "<unknown>".to_string());
                let message = format!("Cannot access '{path_str}': {e}");
                tracing::debug!(warning = %message, "Walk warning");
                on_event(&SortEvent::Warning {
                    message: message.clone(),
                });
                summary.warnings.push(message);
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        let file_name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n,
            None => {
                let message = format!("Skipping '{}': non-UTF-8 filename", path.display());
                on_event(&SortEvent::Warning {
                    message: message.clone(),
                });
                summary.warnings.push(message);
                continue;
            }
        };

        // A previous run's skip report lives under the input root; never
        // re-ingest it.
        if file_name == constants::SKIP_REPORT_FILE_NAME {
            continue;
        }

        // --- Classify ---
        let variant = classify(file_name);
        if variant == FormatVariant::Unrecognized {
            tracing::debug!(file = file_name, "Skipped: unrecognised extension");
            report.record(file_name);
            summary.files_skipped += 1;
            on_event(&SortEvent::Skipped {
                file: file_name.to_string(),
                reason: "unrecognised extension".to_string(),
            });
            continue;
        }

        // --- Extract ---
        let extraction = match extract(file_name, variant) {
            Ok(x) => x,
            Err(e) => {
                tracing::debug!(file = file_name, variant = %variant, error = %e, "Skipped: extraction failed");
                report.record(file_name);
                summary.files_skipped += 1;
                on_event(&SortEvent::Skipped {
                    file: file_name.to_string(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        // --- Synthesize ---
        let dest = synthesize(&config.output_root, &extraction, &config.observer);

        // --- Place ---
        if let Err(e) = platform::fs::ensure_dir(&dest.directory) {
            let message = format!("Cannot create '{}': {e}", dest.directory.display());
            tracing::warn!(warning = %message, "Placement warning");
            on_event(&SortEvent::Warning {
                message: message.clone(),
            });
            summary.warnings.push(message);
            continue;
        }

        let dest_path = dest.full_path();
        if platform::fs::destination_exists(&dest_path) {
            tracing::debug!(dest = %dest_path.display(), "Destination already exists");
            summary.already_existing += 1;
            on_event(&SortEvent::AlreadyExists {
                dest: dest_path.clone(),
            });
            continue;
        }

        match platform::fs::copy_file(path, &dest_path) {
            Ok(_) => {
                tracing::info!(
                    source = %path.display(),
                    dest = %dest_path.display(),
                    "Copied"
                );
                summary.files_copied += 1;
                on_event(&SortEvent::Copied {
                    source: path.to_path_buf(),
                    dest: dest_path,
                });
            }
            Err(e) => {
                let message = format!("Copy failed for '{}': {e}", path.display());
                tracing::warn!(warning = %message, "Placement warning");
                on_event(&SortEvent::Warning {
                    message: message.clone(),
                });
                summary.warnings.push(message);
            }
        }
    }

    // --- Skip report ---
    match report.write(&config.input_root) {
        Ok(Some(path)) => {
            tracing::info!(report = %path.display(), skipped = report.len(), "Skip report written");
            on_event(&SortEvent::ReportWritten { path });
        }
        Ok(None) => {}
        Err(e) => {
            let message = e.to_string();
            tracing::warn!(warning = %message, "Skip report not written");
            on_event(&SortEvent::Warning {
                message: message.clone(),
            });
            summary.warnings.push(message);
        }
    }

    summary.duration = started.elapsed();
    tracing::info!(
        copied = summary.files_copied,
        skipped = summary.files_skipped,
        existing = summary.already_existing,
        warnings = summary.warnings.len(),
        secs = summary.duration.as_secs_f64(),
        "Sort complete"
    );
    Ok(summary)
}

// =============================================================================
// Tests
// =============================================================================
