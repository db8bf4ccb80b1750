// SidSort - platform/mod.rs
//
// Platform abstraction layer: the file placer primitives.
// Dependencies: standard library.
// Must NOT depend on: core, app.

pub mod fs;
