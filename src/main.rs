// LogWindow - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading
// 3. Logging initialisation (mirrored into the window buffer)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can still use
// `crate::app::...`, `crate::ui::...` etc.
pub use logwindow::app;
pub use logwindow::core;
pub use logwindow::platform;
pub use logwindow::ui;
pub use logwindow::util;

use clap::Parser;
use std::path::PathBuf;

/// LogWindow - a searchable log window with save-to-file.
///
/// Without --file the window shows this application's own log output.
#[derive(Parser, Debug)]
#[command(name = "LogWindow", version, about)]
struct Cli {
    /// Title of the log; used in the window title and snapshot file names.
    #[arg(short = 't', long = "title")]
    title: Option<String>,

    /// Text file to load into the window.
    #[arg(short = 'f', long = "file")]
    file: Option<PathBuf>,

    /// Directory saved snapshots are written to.
    #[arg(short = 'l', long = "log-dir")]
    log_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

/// Title preference: --title, then the loaded file's stem, then the app name.
fn resolve_title(cli: &Cli) -> String {
    cli.title
        .clone()
        .or_else(|| {
            cli.file
                .as_deref()
                .and_then(|p| p.file_stem())
                .map(|s| s.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| util::constants::APP_NAME.to_string())
}

fn main() {
    let cli = Cli::parse();

    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    // The buffer mirrors our own log only when no file was given.
    let buffer = core::buffer::LogBuffer::new();
    let mirror = cli.file.is_none().then(|| buffer.clone());
    util::logging::init(cli.debug, config.log_level.as_deref(), mirror);

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "LogWindow starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    if let Some(ref path) = cli.file {
        match platform::fs::read_file_lossy(path) {
            Ok(text) => {
                tracing::info!(path = %path.display(), bytes = text.len(), "Loaded log file");
                buffer.set_text(text);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read log file");
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }

    // Snapshot directory: CLI override > config.toml > platform default
    let log_dir = cli
        .log_dir
        .clone()
        .or(config.log_dir.clone())
        .unwrap_or_else(|| platform_paths.log_dir.clone());
    let context = app::context::AppContext::new(log_dir);

    let title = resolve_title(&cli);
    let window = app::log_window::LogWindow::new(Some(&title), buffer, Some(&context));

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(window.window_title())
            .with_inner_size(util::constants::DEFAULT_WINDOW_SIZE)
            .with_min_inner_size(window.min_size())
            .with_visible(true),
        ..Default::default()
    };

    let dark_mode = config.dark_mode;
    let font_size = config.font_size;
    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            ui::theme::apply(&cc.egui_ctx, dark_mode);
            Ok(Box::new(gui::LogWindowApp::new(window, font_size)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch LogWindow GUI: {e}");
        std::process::exit(1);
    }
}
