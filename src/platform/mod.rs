// LogWindow - platform/mod.rs
//
// Platform abstraction layer: directories, config.toml, filesystem writes,
// desktop folder-open handoff.
// Must NOT depend on: app, ui.

pub mod config;
pub mod fs;
