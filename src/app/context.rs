// LogWindow - app/context.rs
//
// Host-supplied settings and collaborators the window works with: the
// snapshot directory, the time source, and the desktop folder opener.

use crate::core::snapshot::{Clock, LocalClock};
use crate::platform::config::PlatformPaths;
use crate::platform::fs::{SystemOpener, UriOpener};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Application context shared by every log window of a host application.
#[derive(Clone)]
pub struct AppContext {
    log_dir: PathBuf,
    clock: Arc<dyn Clock>,
    opener: Arc<dyn UriOpener>,
}

impl AppContext {
    /// Context writing snapshots to `log_dir`, stamped with local time and
    /// opened through the operating system.
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: log_dir.into(),
            clock: Arc::new(LocalClock),
            opener: Arc::new(SystemOpener),
        }
    }

    /// Context using the platform data directory for snapshots.
    pub fn from_platform() -> Self {
        Self::new(PlatformPaths::resolve().log_dir)
    }

    /// Replace the time source.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the folder-open handoff.
    pub fn with_opener(mut self, opener: Arc<dyn UriOpener>) -> Self {
        self.opener = opener;
        self
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn opener(&self) -> &dyn UriOpener {
        self.opener.as_ref()
    }
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field("log_dir", &self.log_dir)
            .finish_non_exhaustive()
    }
}
