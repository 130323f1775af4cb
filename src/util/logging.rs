// LogWindow - util/logging.rs
//
// Structured logging with runtime-selectable debug mode.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug
//   - Config file: [logging] level = "debug"
//
// Output: stderr, and optionally mirrored into a LogBuffer so the log window
// can display the application's own log. The mirror is written without ANSI
// colour codes and only carries this crate's events; eframe/winit/wgpu
// output goes to stderr alone.

use crate::core::buffer::{BufferWriter, LogBuffer};
use tracing::level_filters::LevelFilter;
use tracing::Subscriber;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// `MakeWriter` that hands every formatted event to a [`LogBuffer`].
#[derive(Debug, Clone)]
pub struct BufferMakeWriter {
    buffer: LogBuffer,
}

impl BufferMakeWriter {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer }
    }
}

impl<'a> MakeWriter<'a> for BufferMakeWriter {
    type Writer = BufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.buffer.writer()
    }
}

/// Resolve the filter directive.
///
/// Priority: RUST_LOG env var > CLI --debug flag > config level > default "info".
fn build_filter(debug_flag: bool, config_level: Option<&str>) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else if let Some(level) = config_level {
        EnvFilter::new(level)
    } else {
        EnvFilter::new(super::constants::DEFAULT_LOG_LEVEL)
    }
}

/// Plain-text layer writing this crate's events into `buffer`.
fn mirror_layer<S>(buffer: LogBuffer) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .compact()
        .with_writer(BufferMakeWriter::new(buffer))
        .with_filter(Targets::new().with_target(super::constants::LOG_TARGET, LevelFilter::TRACE))
}

/// Initialise the logging subsystem.
///
/// `debug_flag` is true when the user passed --debug on the CLI.
/// `config_level` is the level from config.toml (if present).
/// `mirror` receives a plain-text copy of every event when set.
pub fn init(debug_flag: bool, config_level: Option<&str>, mirror: Option<LogBuffer>) {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .compact();

    let result = tracing_subscriber::registry()
        .with(build_filter(debug_flag, config_level))
        .with(stderr_layer)
        .with(mirror.map(mirror_layer))
        .try_init();

    if let Err(e) = result {
        // A subscriber is already installed (e.g. by an embedding host).
        eprintln!("Logging already initialised: {e}");
        return;
    }

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        "Logging initialised"
    );
}
