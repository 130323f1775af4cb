// LogWindow - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogWindow";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "LogWindow";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tracing target prefix of every event this crate emits.
pub const LOG_TARGET: &str = env!("CARGO_CRATE_NAME");

// =============================================================================
// Window
// =============================================================================

/// Prefix of the window title; the log title is appended.
pub const WINDOW_TITLE_PREFIX: &str = "Log for";

/// Title used when the caller does not supply one.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Minimum window size in logical pixels (width, height).
pub const MIN_WINDOW_SIZE: [f32; 2] = [640.0, 480.0];

/// Initial window size in logical pixels (width, height).
pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [800.0, 600.0];

/// Placeholder text shown in the empty search entry.
pub const SEARCH_PLACEHOLDER: &str = "Search...";

/// Interval at which the window repaints so text appended to the buffer by
/// other threads becomes visible without user input.
pub const BUFFER_REFRESH_INTERVAL_MS: u64 = 250;

// =============================================================================
// Snapshots
// =============================================================================

/// File extension of saved log snapshots (without the dot).
pub const LOG_FILE_EXTENSION: &str = "log";

/// Directory name for saved snapshots under the platform data directory.
pub const LOGS_DIR_NAME: &str = "logs";

// =============================================================================
// Configuration
// =============================================================================

/// Name of the optional configuration file in the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default log level when neither RUST_LOG, --debug, nor config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default monospace font size for log text, in points.
pub const DEFAULT_FONT_SIZE: f32 = 13.0;

/// Smallest accepted `[ui] font_size`.
pub const MIN_FONT_SIZE: f32 = 8.0;

/// Largest accepted `[ui] font_size`.
pub const MAX_FONT_SIZE: f32 = 32.0;
