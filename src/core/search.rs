// LogWindow - core/search.rs
//
// Incremental literal text search over a block of log text.
//
// Queries are matched literally and case-insensitively. Matches are byte
// ranges into the searched text. Both directions wrap around at the ends of
// the text.

use regex::{Regex, RegexBuilder};
use std::ops::Range;

/// Compile `query` into a case-insensitive literal matcher.
///
/// Returns `None` for an empty query.
pub fn compile(query: &str) -> Option<Regex> {
    if query.is_empty() {
        return None;
    }
    // An escaped literal always compiles; a failure here means the pattern
    // exceeded the regex size limit, which is treated as "no match".
    RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .map_err(|e| tracing::debug!(error = %e, "Search query rejected"))
        .ok()
}

/// First match starting at or after `from`, wrapping to the start of `text`.
pub fn find_forward(text: &str, query: &str, from: usize) -> Option<Range<usize>> {
    let re = compile(query)?;
    let from = if from <= text.len() && text.is_char_boundary(from) {
        from
    } else {
        0
    };
    re.find_at(text, from)
        .or_else(|| re.find(text))
        .map(|m| m.range())
}

/// Last match starting before `before`, wrapping to the last match in `text`.
pub fn find_backward(text: &str, query: &str, before: usize) -> Option<Range<usize>> {
    let re = compile(query)?;
    re.find_iter(text)
        .take_while(|m| m.start() < before)
        .last()
        .or_else(|| re.find_iter(text).last())
        .map(|m| m.range())
}

/// Number of non-overlapping matches of `query` in `text`.
pub fn count_matches(text: &str, query: &str) -> usize {
    compile(query).map_or(0, |re| re.find_iter(text).count())
}

/// Search cursor: the active query and the range of the current match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    query: String,
    current: Option<Range<usize>>,
}

impl SearchState {
    /// The query used by the most recent search.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Range of the current match, if any.
    pub fn current(&self) -> Option<Range<usize>> {
        self.current.clone()
    }

    /// Whether a search is in progress (non-empty query).
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    /// Search from the beginning of `text`.
    pub fn find_first(&mut self, text: &str, query: &str) -> Option<Range<usize>> {
        self.query = query.to_string();
        self.current = find_forward(text, query, 0);
        self.current()
    }

    /// Advance past the current match. Restarts from the beginning when there
    /// is no current match or it no longer fits `text`.
    pub fn find_next(&mut self, text: &str, query: &str) -> Option<Range<usize>> {
        let from = self.valid_cursor(text).map_or(0, |r| r.end);
        self.query = query.to_string();
        self.current = find_forward(text, query, from);
        self.current()
    }

    /// Move to the match before the current one.
    pub fn find_previous(&mut self, text: &str, query: &str) -> Option<Range<usize>> {
        let before = self.valid_cursor(text).map_or(0, |r| r.start);
        self.query = query.to_string();
        self.current = find_backward(text, query, before);
        self.current()
    }

    /// Forget the current match when it no longer fits `text`.
    pub fn revalidate(&mut self, text: &str) {
        if self.valid_cursor(text).is_none() {
            self.current = None;
        }
    }

    /// Clear the query and the match cursor.
    pub fn reset(&mut self) {
        self.query.clear();
        self.current = None;
    }

    /// The current match, if `text` still has the query at that range.
    fn valid_cursor(&self, text: &str) -> Option<Range<usize>> {
        let current = self.current.clone()?;
        (find_forward(text, &self.query, current.start).as_ref() == Some(&current))
            .then_some(current)
    }
}
