// LogWindow - util/mod.rs
//
// Utility modules: error types, named constants, logging setup.
// Only `logging` reaches into core, to mirror output into a LogBuffer.

pub mod constants;
pub mod error;
pub mod logging;
