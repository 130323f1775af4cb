// LogWindow - tests/e2e_log_window.rs
//
// End-to-end tests for the log window controller.
//
// These exercise the real filesystem (snapshot writes, directory creation)
// and the full command path from WindowCommand to buffer / disk / opener.
// Only the clock and the desktop opener are replaced so results are
// deterministic and no file manager is launched.

use chrono::{NaiveDate, NaiveDateTime};
use logwindow::app::context::AppContext;
use logwindow::app::log_window::{LogWindow, Outcome, SearchAttachment, WindowCommand};
use logwindow::core::buffer::LogBuffer;
use logwindow::core::snapshot::FixedClock;
use logwindow::platform::fs::UriOpener;
use logwindow::util::error::SnapshotError;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

// =============================================================================
// Helpers
// =============================================================================

#[derive(Default)]
struct RecordingOpener {
    uris: Mutex<Vec<String>>,
}

impl UriOpener for RecordingOpener {
    fn open_uri(&self, uri: &str) {
        self.uris.lock().unwrap().push(uri.to_string());
    }
}

fn instant() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 11, 4)
        .unwrap()
        .and_hms_opt(18, 7, 9)
        .unwrap()
}

struct Harness {
    _tmp: TempDir,
    log_dir: PathBuf,
    opener: Arc<RecordingOpener>,
    context: AppContext,
}

fn harness() -> Harness {
    let tmp = TempDir::new().unwrap();
    let log_dir = tmp.path().join("nested").join("logs");
    let opener = Arc::new(RecordingOpener::default());
    let context = AppContext::new(&log_dir)
        .with_clock(Arc::new(FixedClock(instant())))
        .with_opener(opener.clone());
    Harness {
        _tmp: tmp,
        log_dir,
        opener,
        context,
    }
}

// =============================================================================
// Save / clear / open-folder
// =============================================================================

/// Saving creates the missing directory and writes the exact buffer text.
#[test]
fn e2e_save_round_trips_buffer_text() {
    let h = harness();
    assert!(!h.log_dir.exists());

    let text = "wine: starting game\nerr: d3d11 missing\n\u{2714} done\n";
    let buffer = LogBuffer::from_text(text);
    let mut window = LogWindow::new(Some("Half-Life"), buffer, Some(&h.context));

    let outcome = window.handle(WindowCommand::SaveLog).unwrap();
    let expected = h.log_dir.join("Half-Life_2025-11-4_18:7:9.log");
    assert_eq!(outcome, Outcome::Saved(expected.clone()));
    assert!(h.log_dir.is_dir());
    assert_eq!(std::fs::read_to_string(&expected).unwrap(), text);
}

/// Two saves in the same second share a name; the second content wins.
#[test]
fn e2e_save_collision_overwrites_silently() {
    let h = harness();
    let buffer = LogBuffer::from_text("first run");
    let mut window = LogWindow::new(Some("Portal"), buffer.clone(), Some(&h.context));

    window.handle(WindowCommand::SaveLog).unwrap();
    buffer.set_text("second run");
    let Outcome::Saved(path) = window.handle(WindowCommand::SaveLog).unwrap() else {
        panic!("expected Saved outcome");
    };

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "second run");
    assert_eq!(std::fs::read_dir(&h.log_dir).unwrap().count(), 1);
}

/// Clearing then saving produces an empty snapshot.
#[test]
fn e2e_clear_then_save_writes_empty_file() {
    let h = harness();
    let mut window = LogWindow::new(Some("t"), LogBuffer::from_text("noise"), Some(&h.context));
    window.handle(WindowCommand::ClearLog).unwrap();
    window.handle(WindowCommand::ClearLog).unwrap();
    let path = window.save_log().unwrap();
    assert_eq!(std::fs::read_to_string(path).unwrap(), "");
}

/// Save fails with a Write error when the snapshot path is occupied by a
/// directory.
#[test]
fn e2e_save_reports_write_failure() {
    let h = harness();
    let window = LogWindow::new(Some("Blocked"), LogBuffer::from_text("x"), Some(&h.context));
    let target = h.log_dir.join("Blocked_2025-11-4_18:7:9.log");
    std::fs::create_dir_all(&target).unwrap();

    let err = window.save_log().unwrap_err();
    assert!(matches!(err, SnapshotError::Write { .. }), "got {err:?}");
    assert_eq!(err.path(), &target);
}

/// Opening the folder recreates a removed directory before the handoff.
#[test]
fn e2e_open_folder_recreates_directory() {
    let h = harness();
    let window = LogWindow::new(Some("t"), LogBuffer::new(), Some(&h.context));

    std::fs::create_dir_all(&h.log_dir).unwrap();
    std::fs::remove_dir_all(&h.log_dir).unwrap();

    let opened = window.open_log_folder().unwrap();
    assert!(h.log_dir.is_dir());
    assert!(opened.is_absolute());

    let uris = h.opener.uris.lock().unwrap();
    assert_eq!(uris.len(), 1);
    assert!(uris[0].starts_with("file://"), "got {}", uris[0]);
    assert!(uris[0].ends_with("logs"), "got {}", uris[0]);
}

// =============================================================================
// Search routing
// =============================================================================

/// Full Ctrl+F / type / Enter / Shift+Enter / Escape / Ctrl+F cycle.
#[test]
fn e2e_search_session() {
    let h = harness();
    let mut window = LogWindow::new(
        Some("t"),
        LogBuffer::from_text("alpha beta alpha"),
        Some(&h.context),
    );
    assert_eq!(window.attachment(), SearchAttachment::Detached);

    window.handle(WindowCommand::AttachSearch).unwrap();
    assert!(window.take_search_focus_request());

    window
        .handle(WindowCommand::SearchChanged("alpha".into()))
        .unwrap();
    assert_eq!(window.view().current_match(), Some(0..5));

    window.handle(WindowCommand::NextMatch).unwrap();
    assert_eq!(window.view().current_match(), Some(11..16));

    window.handle(WindowCommand::PreviousMatch).unwrap();
    assert_eq!(window.view().current_match(), Some(0..5));

    window.handle(WindowCommand::NextMatch).unwrap();
    window.handle(WindowCommand::StopSearch).unwrap();
    assert_eq!(window.attachment(), SearchAttachment::Detached);
    assert_eq!(window.view().current_match(), None);
    assert!(window.view_mut().take_focus_request());

    // Steps are ignored while detached.
    window.handle(WindowCommand::NextMatch).unwrap();
    assert_eq!(window.view().current_match(), None);

    // Re-attaching with the old text searches again from the top.
    window.handle(WindowCommand::AttachSearch).unwrap();
    assert_eq!(window.search_text(), "alpha");
    assert_eq!(window.view().current_match(), Some(0..5));
}

/// Clearing the buffer mid-search leaves no dangling highlight.
#[test]
fn e2e_clear_during_search_drops_highlight() {
    let h = harness();
    let mut window = LogWindow::new(
        Some("t"),
        LogBuffer::from_text("alpha beta alpha"),
        Some(&h.context),
    );
    window.attach_search_entry();
    window.search_changed("beta".into());
    assert_eq!(window.view().current_match(), Some(6..10));

    window.handle(WindowCommand::ClearLog).unwrap();
    assert_eq!(window.view().current_match(), None);

    window.buffer().set_text("new beta");
    window.next_match();
    assert_eq!(window.view().current_match(), Some(4..8));
}
