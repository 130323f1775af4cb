// LogWindow - platform/fs.rs
//
// Filesystem helpers for log snapshots and the desktop folder-open handoff.

use crate::util::error::{self, LogWindowError, SnapshotError};
use std::path::{Path, PathBuf};

/// Create `dir` (and any missing parents) if it does not exist yet.
pub fn ensure_dir(dir: &Path) -> Result<(), SnapshotError> {
    if dir.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(dir).map_err(|e| SnapshotError::CreateDir {
        path: dir.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(dir = %dir.display(), "Created log directory");
    Ok(())
}

/// Write `text` to `path`, replacing any existing file.
pub fn write_text(path: &Path, text: &str) -> Result<(), SnapshotError> {
    std::fs::write(path, text).map_err(|e| SnapshotError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read the full content of a file as a string.
///
/// For files with invalid UTF-8, uses lossy conversion.
pub fn read_file_lossy(path: &Path) -> error::Result<String> {
    let bytes = std::fs::read(path).map_err(|e| LogWindowError::Io {
        path: path.to_path_buf(),
        operation: "read log file",
        source: e,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Absolute form of `dir` for use in a `file://` URI.
///
/// Falls back to joining with the current directory when the path cannot be
/// canonicalised (for example on a network share that refuses `stat`).
pub fn absolute(dir: &Path) -> PathBuf {
    std::fs::canonicalize(dir).unwrap_or_else(|_| {
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(dir))
                .unwrap_or_else(|_| dir.to_path_buf())
        }
    })
}

/// `file://` URI for a local directory.
pub fn file_uri(dir: &Path) -> String {
    format!("file://{}", dir.display())
}

/// Desktop integration that opens a URI in its default handler.
///
/// Implementations report their own failures; callers never inspect them.
pub trait UriOpener {
    fn open_uri(&self, uri: &str);
}

/// Hands URIs to the operating system's default handler.
///
/// Platform behaviour:
/// - **Windows**: `explorer.exe <uri>`
/// - **macOS**: `open <uri>`
/// - **Linux / BSD**: `xdg-open <uri>`
///
/// The subprocess is spawned detached; any launch failure is logged at WARN
/// level but never propagated so the UI never blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl SystemOpener {
    fn program() -> &'static str {
        if cfg!(target_os = "windows") {
            "explorer"
        } else if cfg!(target_os = "macos") {
            "open"
        } else {
            "xdg-open"
        }
    }
}

impl UriOpener for SystemOpener {
    fn open_uri(&self, uri: &str) {
        let program = Self::program();
        match std::process::Command::new(program).arg(uri).spawn() {
            Ok(_) => tracing::debug!(uri, program, "Requested folder open"),
            Err(e) => tracing::warn!(
                uri,
                program,
                error = %e,
                "Failed to open folder in file manager"
            ),
        }
    }
}
