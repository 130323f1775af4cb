// LogWindow - lib.rs
//
// Library entry point, exposing all non-GUI modules for integration testing
// and for embedding the window into a host application.
//
// The eframe `App` glue lives in `gui.rs` on the binary side.

pub mod app;
pub mod core;
pub mod platform;
pub mod ui;
pub mod util;
