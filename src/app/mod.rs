// SidSort - app/mod.rs
//
// Application layer: run orchestration and the skipped-file report.
// Dependencies: core and platform layers.

pub mod report;
pub mod sort;
