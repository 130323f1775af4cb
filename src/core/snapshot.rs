// LogWindow - core/snapshot.rs
//
// Naming of saved log snapshots and the time source they are stamped with.
// Core layer: no I/O. Writing the file is done by the platform layer.

use crate::util::constants::LOG_FILE_EXTENSION;
use chrono::{Datelike, NaiveDateTime, Timelike};
use std::path::{Path, PathBuf};

/// Source of the wall-clock time used to stamp snapshots.
pub trait Clock {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// Always returns the same instant. Used by tests and reproducible exports.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Build the snapshot file name `<title>_<Y>-<M>-<D>_<H>:<Min>:<S>.log`.
///
/// Components are not zero-padded, so 2024-03-07 09:05:02 renders as
/// `2024-3-7_9:5:2`. Two saves within the same second share a name.
pub fn snapshot_file_name(title: &str, at: &NaiveDateTime) -> String {
    format!(
        "{title}_{}-{}-{}_{}:{}:{}.{LOG_FILE_EXTENSION}",
        at.year(),
        at.month(),
        at.day(),
        at.hour(),
        at.minute(),
        at.second()
    )
}

/// Full snapshot path inside `log_dir`.
pub fn snapshot_path(log_dir: &Path, title: &str, at: &NaiveDateTime) -> PathBuf {
    log_dir.join(snapshot_file_name(title, at))
}
