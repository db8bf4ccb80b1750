// SidSort - core/mod.rs
//
// Core business logic layer: filename classification, metadata
// extraction, and destination path/name synthesis.
// Dependencies: standard library only.
// Must NOT depend on: app, platform, or any I/O crate directly.

pub mod classify;
pub mod extract;
pub mod model;
pub mod naming;
