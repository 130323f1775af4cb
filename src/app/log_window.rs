// LogWindow - app/log_window.rs
//
// The log window controller. Holds a caller-owned buffer, the text view over
// it, and the search entry state; turns window commands into buffer,
// filesystem, and search operations.
//
// Search attachment is a two-state machine:
//
//   Detached --(Ctrl+F / attach_search_entry)--> Attached
//   Attached --(Escape / detach_search_entry)--> Detached
//
// Enter / Shift+Enter only step through matches while Attached.

use crate::app::context::AppContext;
use crate::app::text_view::LogTextView;
use crate::core::buffer::LogBuffer;
use crate::core::snapshot;
use crate::platform::fs;
use crate::util::constants;
use crate::util::error::{self, SnapshotError};
use std::path::PathBuf;

/// Whether the search entry currently has focus and drives the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchAttachment {
    #[default]
    Detached,
    Attached,
}

/// Input events the window reacts to. Produced by the UI layer from key
/// presses, button clicks and search entry edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowCommand {
    /// Escape: detach the search entry.
    StopSearch,
    /// Ctrl+F: attach and focus the search entry.
    AttachSearch,
    /// Enter: next match.
    NextMatch,
    /// Shift+Enter: previous match.
    PreviousMatch,
    /// The search entry text changed.
    SearchChanged(String),
    ClearLog,
    SaveLog,
    OpenLogFolder,
}

/// Result of a successfully handled command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing the host needs to report.
    None,
    /// A snapshot was written to this path.
    Saved(PathBuf),
    /// The desktop was asked to open this directory.
    FolderOpened(PathBuf),
}

/// A window presenting one log buffer.
#[derive(Debug)]
pub struct LogWindow {
    title: String,
    buffer: LogBuffer,
    view: LogTextView,
    context: AppContext,
    search_text: String,
    attachment: SearchAttachment,
    search_focus_requested: bool,
}

impl LogWindow {
    /// Create a window over `buffer`.
    ///
    /// `application` supplies the log directory, clock and folder opener;
    /// when `None` the platform defaults are used.
    pub fn new(title: Option<&str>, buffer: LogBuffer, application: Option<&AppContext>) -> Self {
        let title = title.unwrap_or(constants::DEFAULT_TITLE).to_string();
        let context = application.cloned().unwrap_or_else(AppContext::from_platform);

        tracing::debug!(
            title = %title,
            log_dir = %context.log_dir().display(),
            bytes = buffer.len(),
            "Log window created"
        );

        Self {
            title,
            view: LogTextView::new(buffer.clone()),
            buffer,
            context,
            search_text: String::new(),
            attachment: SearchAttachment::Detached,
            search_focus_requested: false,
        }
    }

    /// Title shown in the window decoration.
    pub fn window_title(&self) -> String {
        format!("{} {}", constants::WINDOW_TITLE_PREFIX, self.title)
    }

    /// Minimum window size in logical pixels.
    pub fn min_size(&self) -> [f32; 2] {
        constants::MIN_WINDOW_SIZE
    }

    pub fn buffer(&self) -> &LogBuffer {
        &self.buffer
    }

    pub fn view(&self) -> &LogTextView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut LogTextView {
        &mut self.view
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn attachment(&self) -> SearchAttachment {
        self.attachment
    }

    pub fn is_search_attached(&self) -> bool {
        self.attachment == SearchAttachment::Attached
    }

    /// Consume a pending request to focus the search entry.
    pub fn take_search_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.search_focus_requested)
    }

    /// Dispatch one command.
    pub fn handle(&mut self, command: WindowCommand) -> error::Result<Outcome> {
        match command {
            WindowCommand::StopSearch => self.detach_search_entry(),
            WindowCommand::AttachSearch => self.attach_search_entry(),
            WindowCommand::NextMatch => self.next_match(),
            WindowCommand::PreviousMatch => self.previous_match(),
            WindowCommand::SearchChanged(text) => self.search_changed(text),
            WindowCommand::ClearLog => self.clear_log(),
            WindowCommand::SaveLog => return Ok(Outcome::Saved(self.save_log()?)),
            WindowCommand::OpenLogFolder => {
                return Ok(Outcome::FolderOpened(self.open_log_folder()?))
            }
        }
        Ok(Outcome::None)
    }

    // -------------------------------------------------------------------------
    // Buttons
    // -------------------------------------------------------------------------

    /// Empty the buffer.
    pub fn clear_log(&mut self) {
        self.buffer.set_text("");
        self.view.sync();
        tracing::debug!(title = %self.title, "Log cleared");
    }

    /// Write the buffer to `<log_dir>/<title>_<Y>-<M>-<D>_<H>:<Min>:<S>.log`.
    ///
    /// Creates the log directory first if needed. An existing file with the
    /// same name is overwritten.
    pub fn save_log(&self) -> Result<PathBuf, SnapshotError> {
        let now = self.context.clock().now();
        let log_dir = self.context.log_dir();
        let path = snapshot::snapshot_path(log_dir, &self.title, &now);

        fs::ensure_dir(log_dir)?;
        let text = self.buffer.text();
        fs::write_text(&path, &text)?;

        tracing::info!(path = %path.display(), bytes = text.len(), "Log saved");
        Ok(path)
    }

    /// Open the log directory in the desktop file manager, creating it first
    /// if needed. Returns the directory that was handed off.
    pub fn open_log_folder(&self) -> Result<PathBuf, SnapshotError> {
        let log_dir = self.context.log_dir();
        fs::ensure_dir(log_dir)?;
        let dir = fs::absolute(log_dir);
        self.context.opener().open_uri(&fs::file_uri(&dir));
        Ok(dir)
    }

    // -------------------------------------------------------------------------
    // Search entry
    // -------------------------------------------------------------------------

    /// Give the search entry focus. Existing entry text is searched again
    /// from the beginning straight away.
    pub fn attach_search_entry(&mut self) {
        self.attachment = SearchAttachment::Attached;
        self.search_focus_requested = true;
        if !self.search_text.is_empty() {
            self.view.find_first(&self.search_text);
        }
    }

    /// Leave search: clear the highlight and hand focus back to the view.
    pub fn detach_search_entry(&mut self) {
        if self.attachment == SearchAttachment::Detached {
            return;
        }
        self.attachment = SearchAttachment::Detached;
        self.search_focus_requested = false;
        self.view.reset_search();
        self.view.grab_focus();
    }

    /// Record new entry text and, while attached, restart the search.
    pub fn search_changed(&mut self, text: String) {
        self.search_text = text;
        if self.is_search_attached() {
            self.view.find_first(&self.search_text);
        }
    }

    pub fn next_match(&mut self) {
        if self.is_search_attached() {
            self.view.find_next(&self.search_text);
        }
    }

    pub fn previous_match(&mut self) {
        if self.is_search_attached() {
            self.view.find_previous(&self.search_text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::snapshot::FixedClock;
    use crate::platform::fs::UriOpener;
    use chrono::NaiveDate;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    #[derive(Default)]
    struct RecordingOpener {
        uris: Mutex<Vec<String>>,
    }

    impl UriOpener for RecordingOpener {
        fn open_uri(&self, uri: &str) {
            self.uris.lock().unwrap().push(uri.to_string());
        }
    }

    fn context(dir: &TempDir) -> (AppContext, Arc<RecordingOpener>) {
        let opener = Arc::new(RecordingOpener::default());
        let at = NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 2)
            .unwrap();
        let ctx = AppContext::new(dir.path().join("logs"))
            .with_clock(Arc::new(FixedClock(at)))
            .with_opener(opener.clone());
        (ctx, opener)
    }

    fn window(text: &str) -> (LogWindow, TempDir, Arc<RecordingOpener>) {
        let dir = TempDir::new().unwrap();
        let (ctx, opener) = context(&dir);
        let window = LogWindow::new(Some("Quake"), LogBuffer::from_text(text), Some(&ctx));
        (window, dir, opener)
    }

    #[test]
    fn test_window_title_uses_template() {
        let (w, _dir, _) = window("");
        assert_eq!(w.window_title(), "Log for Quake");
        assert_eq!(w.min_size(), [640.0, 480.0]);
    }

    #[test]
    fn test_missing_title_uses_default() {
        let dir = TempDir::new().unwrap();
        let (ctx, _) = context(&dir);
        let w = LogWindow::new(None, LogBuffer::new(), Some(&ctx));
        assert_eq!(w.window_title(), "Log for Untitled");
    }

    #[test]
    fn test_clear_is_idempotent() {
        let (mut w, _dir, _) = window("some output\nmore output\n");
        w.clear_log();
        assert!(w.buffer().is_empty());
        w.clear_log();
        assert!(w.buffer().is_empty());
    }

    #[test]
    fn test_clear_is_visible_through_callers_handle() {
        let dir = TempDir::new().unwrap();
        let (ctx, _) = context(&dir);
        let buffer = LogBuffer::from_text("caller text");
        let mut w = LogWindow::new(Some("t"), buffer.clone(), Some(&ctx));
        w.handle(WindowCommand::ClearLog).unwrap();
        assert_eq!(buffer.text(), "");
    }

    #[test]
    fn test_save_writes_buffer_to_stamped_file() {
        let (w, dir, _) = window("line 1\nline 2\n");
        let path = w.save_log().unwrap();
        assert_eq!(
            path,
            dir.path().join("logs").join("Quake_2024-3-7_9:5:2.log")
        );
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "line 1\nline 2\n");
    }

    #[test]
    fn test_save_twice_same_second_overwrites() {
        let (w, _dir, _) = window("first");
        let first = w.save_log().unwrap();
        w.buffer().set_text("second");
        let second = w.save_log().unwrap();
        assert_eq!(first, second);
        assert_eq!(std::fs::read_to_string(&second).unwrap(), "second");
    }

    #[test]
    fn test_handle_wraps_snapshot_failure() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("logs"), "not a directory").unwrap();
        let (ctx, _) = context(&dir);
        let mut w = LogWindow::new(Some("t"), LogBuffer::from_text("x"), Some(&ctx));
        let err = w.handle(WindowCommand::SaveLog).unwrap_err();
        assert!(
            matches!(
                err,
                error::LogWindowError::Snapshot(SnapshotError::CreateDir { .. })
            ),
            "got {err:?}"
        );
    }

    #[test]
    fn test_missing_application_uses_platform_log_dir() {
        let w = LogWindow::new(Some("t"), LogBuffer::new(), None);
        assert_eq!(
            w.context.log_dir(),
            crate::platform::config::PlatformPaths::resolve().log_dir
        );
    }

    #[test]
    fn test_open_folder_creates_dir_and_hands_off_uri() {
        let (mut w, dir, opener) = window("");
        let logs = dir.path().join("logs");
        assert!(!logs.exists());

        let outcome = w.handle(WindowCommand::OpenLogFolder).unwrap();
        assert!(logs.is_dir());

        let opened = match outcome {
            Outcome::FolderOpened(path) => path,
            other => panic!("expected FolderOpened, got {other:?}"),
        };
        let uris = opener.uris.lock().unwrap();
        assert_eq!(*uris, vec![format!("file://{}", opened.display())]);
    }

    #[test]
    fn test_search_first_next_previous() {
        let (mut w, _dir, _) = window("alpha beta alpha");
        w.handle(WindowCommand::AttachSearch).unwrap();
        w.handle(WindowCommand::SearchChanged("alpha".into())).unwrap();
        assert_eq!(w.view().current_match(), Some(0..5));
        w.handle(WindowCommand::NextMatch).unwrap();
        assert_eq!(w.view().current_match(), Some(11..16));
        w.handle(WindowCommand::PreviousMatch).unwrap();
        assert_eq!(w.view().current_match(), Some(0..5));
    }

    #[test]
    fn test_reattach_with_existing_text_refinds_first() {
        let (mut w, _dir, _) = window("alpha beta alpha");
        w.attach_search_entry();
        w.search_changed("alpha".into());
        w.next_match();
        assert_eq!(w.view().current_match(), Some(11..16));

        w.detach_search_entry();
        assert_eq!(w.view().current_match(), None);

        w.attach_search_entry();
        assert_eq!(w.view().current_match(), Some(0..5));
    }

    #[test]
    fn test_escape_detaches_and_focuses_view() {
        let (mut w, _dir, _) = window("alpha");
        w.handle(WindowCommand::AttachSearch).unwrap();
        assert!(w.take_search_focus_request());
        w.handle(WindowCommand::StopSearch).unwrap();
        assert_eq!(w.attachment(), SearchAttachment::Detached);
        assert!(w.view_mut().take_focus_request());
    }

    #[test]
    fn test_escape_while_detached_is_noop() {
        let (mut w, _dir, _) = window("alpha");
        w.handle(WindowCommand::StopSearch).unwrap();
        assert_eq!(w.attachment(), SearchAttachment::Detached);
        assert!(!w.view_mut().take_focus_request());
    }

    #[test]
    fn test_enter_ignored_while_detached() {
        let (mut w, _dir, _) = window("alpha beta alpha");
        w.search_changed("alpha".into());
        assert_eq!(w.view().current_match(), None);
        w.handle(WindowCommand::NextMatch).unwrap();
        w.handle(WindowCommand::PreviousMatch).unwrap();
        assert_eq!(w.view().current_match(), None);
    }
}
