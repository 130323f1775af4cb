// LogWindow - ui/mod.rs
//
// UI layer: presentation and input routing only.
// Dependencies: app (window controller), egui.
// Must NOT depend on: platform, direct I/O.

pub mod panels;
pub mod shortcuts;
pub mod theme;
