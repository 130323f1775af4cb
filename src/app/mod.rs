// LogWindow - app/mod.rs
//
// Application layer: the log window controller, its search collaborator,
// and the host context they run in.
// Dependencies: core, platform (directories, fs, opener trait).
// Must NOT depend on: ui, egui.

pub mod context;
pub mod log_window;
pub mod text_view;
