// LogWindow - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all LogWindow operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum LogWindowError {
    /// Saving a snapshot or preparing the log directory failed.
    Snapshot(SnapshotError),

    /// I/O error with path context (e.g. reading the --file input).
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for LogWindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Snapshot(e) => write!(f, "Snapshot error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for LogWindowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Snapshot(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Snapshot errors
// ---------------------------------------------------------------------------

/// Errors raised while writing a log snapshot or creating the log directory.
#[derive(Debug)]
pub enum SnapshotError {
    /// The log directory did not exist and could not be created.
    CreateDir { path: PathBuf, source: io::Error },

    /// The snapshot file could not be written.
    Write { path: PathBuf, source: io::Error },
}

impl SnapshotError {
    /// Path the failed operation was acting on.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::CreateDir { path, .. } | Self::Write { path, .. } => path,
        }
    }
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateDir { path, source } => write!(
                f,
                "Cannot create log directory '{}': {source}",
                path.display()
            ),
            Self::Write { path, source } => {
                write!(f, "Cannot write log file '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CreateDir { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
        }
    }
}

impl From<SnapshotError> for LogWindowError {
    fn from(e: SnapshotError) -> Self {
        Self::Snapshot(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for LogWindow results.
pub type Result<T> = std::result::Result<T, LogWindowError>;
