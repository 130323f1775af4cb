// LogWindow - core/mod.rs
//
// Core logic layer: the shared text buffer, literal search, snapshot naming.
// Must NOT depend on: ui, platform, app, or perform file I/O.

pub mod buffer;
pub mod search;
pub mod snapshot;
