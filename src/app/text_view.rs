// LogWindow - app/text_view.rs
//
// The log text view: a live binding to a LogBuffer plus the search cursor.
//
// The view keeps no copy of the buffer text between calls, only the byte
// offset where each line starts. The UI layer reads the visible lines through
// `line_text()`. Match position lives here so the window only has to route
// events.

use crate::core::buffer::LogBuffer;
use crate::core::search::{self, SearchState};
use std::ops::Range;

/// Renders one buffer and owns the search state over it.
#[derive(Debug)]
pub struct LogTextView {
    buffer: LogBuffer,
    search: SearchState,
    /// Buffer revision the search cursor and line index were last checked against.
    seen_revision: u64,
    /// Byte offset of the first character of every line.
    line_starts: Vec<usize>,
    /// Buffer length the line index was built for.
    indexed_len: usize,
    /// Matches of the active query as of the last search or `sync`.
    match_count: usize,
    focus_requested: bool,
    scroll_requested: bool,
}

impl LogTextView {
    pub fn new(buffer: LogBuffer) -> Self {
        let (text, seen_revision) = buffer.snapshot();
        Self {
            buffer,
            search: SearchState::default(),
            seen_revision,
            line_starts: line_starts(&text),
            indexed_len: text.len(),
            match_count: 0,
            focus_requested: false,
            scroll_requested: false,
        }
    }

    pub fn buffer(&self) -> &LogBuffer {
        &self.buffer
    }

    /// Highlight the first match of `query`, searching from the buffer start.
    pub fn find_first(&mut self, query: &str) -> Option<Range<usize>> {
        let (text, revision) = self.buffer.snapshot();
        self.reindex(&text, revision);
        let found = self.search.find_first(&text, query);
        self.after_search(&text, query, &found);
        found
    }

    /// Highlight the next match after the current one.
    pub fn find_next(&mut self, query: &str) -> Option<Range<usize>> {
        let (text, revision) = self.buffer.snapshot();
        self.reindex(&text, revision);
        let found = self.search.find_next(&text, query);
        self.after_search(&text, query, &found);
        found
    }

    /// Highlight the match before the current one.
    pub fn find_previous(&mut self, query: &str) -> Option<Range<usize>> {
        let (text, revision) = self.buffer.snapshot();
        self.reindex(&text, revision);
        let found = self.search.find_previous(&text, query);
        self.after_search(&text, query, &found);
        found
    }

    fn after_search(&mut self, text: &str, query: &str, found: &Option<Range<usize>>) {
        self.match_count = search::count_matches(text, query);
        self.scroll_requested = found.is_some();
        tracing::trace!(query, found = ?found, "Search step");
    }

    /// Drop any highlight and query.
    pub fn reset_search(&mut self) {
        self.search.reset();
        self.match_count = 0;
        self.scroll_requested = false;
    }

    /// Current match range, if any.
    pub fn current_match(&self) -> Option<Range<usize>> {
        self.search.current()
    }

    /// Query of the active search; empty when idle.
    pub fn query(&self) -> &str {
        self.search.query()
    }

    /// Whether a non-empty query is active.
    pub fn is_searching(&self) -> bool {
        self.search.is_active()
    }

    /// Number of matches of the active query in the buffer.
    pub fn match_count(&self) -> usize {
        self.match_count
    }

    /// Re-check the search cursor and line index after the buffer changed
    /// underneath them.
    pub fn sync(&mut self) {
        if self.buffer.revision() == self.seen_revision {
            return;
        }
        let (text, revision) = self.buffer.snapshot();
        self.search.revalidate(&text);
        self.match_count = search::count_matches(&text, self.search.query());
        self.reindex(&text, revision);
    }

    fn reindex(&mut self, text: &str, revision: u64) {
        if revision == self.seen_revision {
            return;
        }
        self.line_starts = line_starts(text);
        self.indexed_len = text.len();
        self.seen_revision = revision;
    }

    /// Number of lines as of the last `sync`.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte range of line `index`, including its trailing newline.
    pub fn line_range(&self, index: usize) -> Option<Range<usize>> {
        let start = *self.line_starts.get(index)?;
        let end = self
            .line_starts
            .get(index + 1)
            .copied()
            .unwrap_or(self.indexed_len);
        Some(start..end)
    }

    /// Text of line `index` without its trailing newline.
    pub fn line_text(&self, index: usize) -> Option<String> {
        let range = self.line_range(index)?;
        let mut line = self.buffer.slice(range.start, range.end);
        if line.ends_with('\n') {
            line.pop();
        }
        Some(line)
    }

    /// Index of the line containing byte `offset`.
    pub fn line_of(&self, offset: usize) -> usize {
        self.line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1)
    }

    /// Ask the UI to move keyboard focus to the view.
    pub fn grab_focus(&mut self) {
        self.focus_requested = true;
    }

    /// Consume a pending focus request.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }

    /// Consume a pending request to scroll the current match into view.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_requested)
    }
}

fn line_starts(text: &str) -> Vec<usize> {
    if text.is_empty() {
        return Vec::new();
    }
    std::iter::once(0)
        .chain(
            text.match_indices('\n')
                .map(|(i, _)| i + 1)
                .filter(|&start| start < text.len()),
        )
        .collect()
}
