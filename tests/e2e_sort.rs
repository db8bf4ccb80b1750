// SidSort - tests/e2e_sort.rs
//
// End-to-end tests for the sorting pipeline.
//
// These tests exercise the real filesystem: real walkdir traversal, real
// directory creation, real byte copies -- no mocks, no stubs.  This covers
// the full path from a raw receiver file on disk to a renamed copy in the
// date-derived repository tree, plus the skip report and the idempotence
// contract.

use sidsort::app::sort::run_sort;
use sidsort::core::model::{RunConfig, SortEvent};
use sidsort::util::error::SortError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// =============================================================================
// Helpers
// =============================================================================

/// One file of every supported variant, two unprocessable files, and one
/// file nested in a subdirectory.
fn make_input_tree() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path();

    fs::write(root.join("20210607_ABC123.dat"), "dat bytes").expect("write dat");
    fs::write(root.join("AA20210115rest.spd"), "spd 4-digit").expect("write spd4");
    fs::write(root.join("BB190623eve.spd"), "spd 2-digit").expect("write spd2");
    fs::write(
        root.join("Staribus4ChannelLogger_RawData_20190101_000021.xml"),
        "xml bytes",
    )
    .expect("write xml");
    fs::write(root.join("UT20110307_UKRAA_Rx_VLF_SDawes.csv"), "csv bytes")
        .expect("write csv");

    // Unprocessable: unknown extension, and a .dat with no date prefix.
    fs::write(root.join("notes.txt"), "not receiver data").expect("write txt");
    fs::write(root.join("short.dat"), "no date here").expect("write bad dat");

    // Nested input: the walk must descend into subdirectories.
    let sub = root.join("june-backlog");
    fs::create_dir(&sub).expect("mkdir sub");
    fs::write(sub.join("20210608_ABC123.dat"), "nested dat").expect("write nested dat");

    dir
}

fn config(input: &Path, output: &Path) -> RunConfig {
    RunConfig::new(input, output, "JCook")
}

/// All destination paths (relative to the output root) expected from
/// `make_input_tree` with observer JCook.
fn expected_destinations() -> Vec<&'static str> {
    vec![
        "2021/2106/210607/UT20210607_VLF_JCook.dat",
        "2021/2106/210608/UT20210608_VLF_JCook.dat",
        "2021/2101/210115/UT20210115rest_VLF_JCook.spd",
        "2019/1906/190623/UT20190623eve_VLF_JCook.spd",
        "2019/1901/190101/UT20190101_000021_Staribus4ChannelLogger_RawData_VLF_JCook.xml",
        "2011/1103/110307/UT20110307_UKRAA_Rx_VLF_SDawes.csv",
    ]
}

/// Every file path under `root`, relative, with `/` separators.
fn files_under(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(root)
                .expect("under root")
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect();
    files.sort();
    files
}

// =============================================================================
// Full pipeline E2E
// =============================================================================

/// Every variant lands at its canonical destination; content survives the
/// copy; skipped files are reported and absent from the output tree.
#[test]
fn e2e_sorts_all_variants_into_date_tree() {
    let input = make_input_tree();
    let output = tempfile::tempdir().unwrap();

    let summary = run_sort(&config(input.path(), output.path()), |_| {}).unwrap();

    assert_eq!(summary.files_copied, 6, "all six recognised files copied");
    assert_eq!(summary.files_skipped, 2, "txt and malformed dat skipped");
    assert_eq!(summary.already_existing, 0);
    assert!(summary.warnings.is_empty(), "unexpected: {:?}", summary.warnings);

    for rel in expected_destinations() {
        let dest = output.path().join(rel);
        assert!(dest.is_file(), "expected destination missing: {rel}");
    }

    // Bytes are copied, not truncated or substituted.
    assert_eq!(
        fs::read_to_string(output.path().join("2021/2106/210608/UT20210608_VLF_JCook.dat"))
            .unwrap(),
        "nested dat"
    );

    // Skipped files never reach the output tree.
    let out_files = files_under(output.path());
    assert!(
        !out_files.iter().any(|f| f.contains("notes.txt") || f.contains("short.dat")),
        "skipped files leaked into output: {out_files:?}"
    );
    assert_eq!(out_files.len(), 6, "exactly the six destinations: {out_files:?}");
}

/// The skip report is written under the input root, one filename per line.
#[test]
fn e2e_skip_report_lists_rejected_files() {
    let input = make_input_tree();
    let output = tempfile::tempdir().unwrap();

    run_sort(&config(input.path(), output.path()), |_| {}).unwrap();

    let report = input.path().join("skipreport.log");
    assert!(report.is_file(), "skip report should exist");
    let content = fs::read_to_string(&report).unwrap();
    let mut lines: Vec<&str> = content.lines().collect();
    lines.sort_unstable();
    assert_eq!(lines, vec!["notes.txt", "short.dat"]);
}

/// No skip report is created when every file is processed.
#[test]
fn e2e_no_report_when_nothing_skipped() {
    let input = tempfile::tempdir().unwrap();
    fs::write(input.path().join("20210607_A.dat"), "x").unwrap();
    let output = tempfile::tempdir().unwrap();

    let summary = run_sort(&config(input.path(), output.path()), |_| {}).unwrap();
    assert_eq!(summary.files_skipped, 0);
    assert!(!input.path().join("skipreport.log").exists());
}

// =============================================================================
// Idempotence E2E
// =============================================================================

/// Running twice against the same roots yields the same on-disk state:
/// nothing is copied again, nothing errors, every destination is reported
/// as already existing.
#[test]
fn e2e_second_run_is_idempotent() {
    let input = make_input_tree();
    let output = tempfile::tempdir().unwrap();

    let first = run_sort(&config(input.path(), output.path()), |_| {}).unwrap();
    let after_first = files_under(output.path());

    let second = run_sort(&config(input.path(), output.path()), |_| {}).unwrap();
    let after_second = files_under(output.path());

    assert_eq!(first.files_copied, 6);
    assert_eq!(second.files_copied, 0, "second run must copy nothing");
    assert_eq!(second.already_existing, 6);
    assert!(second.warnings.is_empty(), "unexpected: {:?}", second.warnings);
    assert_eq!(after_first, after_second, "output tree must be unchanged");
}

// =============================================================================
// Events E2E
// =============================================================================

/// Progress events agree with the summary counters.
#[test]
fn e2e_events_match_summary() {
    let input = make_input_tree();
    let output = tempfile::tempdir().unwrap();

    let mut copied = 0usize;
    let mut skipped = 0usize;
    let mut existing = 0usize;
    let mut report_written = 0usize;
    let summary = run_sort(&config(input.path(), output.path()), |event| match event {
        SortEvent::Copied { .. } => copied += 1,
        SortEvent::AlreadyExists { .. } => existing += 1,
        SortEvent::Skipped { .. } => skipped += 1,
        SortEvent::ReportWritten { .. } => report_written += 1,
        SortEvent::Warning { .. } => {}
    })
    .unwrap();

    assert_eq!(copied, summary.files_copied);
    assert_eq!(skipped, summary.files_skipped);
    assert_eq!(existing, summary.already_existing);
    assert_eq!(report_written, 1);
}

// =============================================================================
// Environment errors E2E
// =============================================================================

/// A missing input root aborts before anything is written.
#[test]
fn e2e_missing_input_root_is_fatal() {
    let output = tempfile::tempdir().unwrap();
    let result = run_sort(
        &config(Path::new("/nonexistent/sidsort-e2e-input"), output.path()),
        |_| {},
    );
    assert!(
        matches!(result, Err(SortError::InputRootNotFound { .. })),
        "expected InputRootNotFound, got {result:?}"
    );
    assert!(files_under(output.path()).is_empty());
}
