// LogWindow - platform/config.rs
//
// Platform-specific directory resolution and config.toml loading with
// startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for LogWindow data and configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/logwindow/ or %APPDATA%\LogWindow\config\)
    pub config_dir: PathBuf,

    /// Default directory for saved log snapshots, under the platform data
    /// directory (e.g. ~/.local/share/logwindow/logs/).
    pub log_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let log_dir = proj_dirs.data_dir().join(constants::LOGS_DIR_NAME);

            tracing::debug!(
                config = %config_dir.display(),
                logs = %log_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                log_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                log_dir: fallback.join(constants::LOGS_DIR_NAME),
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[logs]` section.
    pub logs: LogsSection,
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[logs]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LogsSection {
    /// Directory saved snapshots are written to.
    pub directory: Option<String>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
    /// Log text font size in points.
    pub font_size: Option<f32>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Snapshot directory override; `None` means the platform default.
    pub log_dir: Option<PathBuf>,
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    /// Log text font size in points.
    pub font_size: f32,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            dark_mode: true,
            font_size: constants::DEFAULT_FONT_SIZE,
            log_level: None,
        }
    }
}

/// Parse and validate config.toml content.
///
/// Out-of-range values fall back to defaults and are reported as
/// `ConfigError::ValueOutOfRange` in the returned list.
pub fn parse_config(path: &Path, content: &str) -> Result<(AppConfig, Vec<ConfigError>), ConfigError> {
    let raw: RawConfig = toml::from_str(content).map_err(|e| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut config = AppConfig::default();
    let mut problems = Vec::new();

    // -- Logs: directory --
    if let Some(ref dir) = raw.logs.directory {
        if dir.trim().is_empty() {
            problems.push(ConfigError::ValueOutOfRange {
                field: "logs.directory".to_string(),
                value: dir.clone(),
                expected: "a non-empty path".to_string(),
            });
        } else {
            config.log_dir = Some(PathBuf::from(dir));
        }
    }

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            _ => problems.push(ConfigError::ValueOutOfRange {
                field: "ui.theme".to_string(),
                value: theme.clone(),
                expected: "\"dark\" or \"light\"".to_string(),
            }),
        }
    }

    // -- UI: font_size --
    if let Some(size) = raw.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
        } else {
            problems.push(ConfigError::ValueOutOfRange {
                field: "ui.font_size".to_string(),
                value: size.to_string(),
                expected: format!(
                    "{}-{}",
                    constants::MIN_FONT_SIZE,
                    constants::MAX_FONT_SIZE
                ),
            });
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            problems.push(ConfigError::ValueOutOfRange {
                field: "logging.level".to_string(),
                value: level.clone(),
                expected: "error, warn, info, debug, trace".to_string(),
            });
        }
    }

    Ok((config, problems))
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first-run).
/// If the file is unreadable or unparseable, returns defaults and a warning;
/// the application still starts but the user is informed.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), Vec::new());
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            let err = ConfigError::Io {
                path: config_path,
                source: e,
            };
            return (AppConfig::default(), vec![format!("{err}. Using defaults.")]);
        }
    };

    match parse_config(&config_path, &content) {
        Ok((config, problems)) => {
            tracing::info!(path = %config_path.display(), "Loaded config.toml");
            let warnings: Vec<String> = problems
                .iter()
                .map(|p| format!("{p}. Using default."))
                .collect();
            if !warnings.is_empty() {
                tracing::warn!(
                    count = warnings.len(),
                    "Config validation produced warnings"
                );
            }
            (config, warnings)
        }
        Err(e) => (AppConfig::default(), vec![format!("{e}. Using defaults.")]),
    }
}
