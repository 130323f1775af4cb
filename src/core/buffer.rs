// LogWindow - core/buffer.rs
//
// Shared, caller-owned log text buffer.
//
// The window never owns the text: it holds a clone of the handle and reads
// or clears it on demand. Every clone observes the same contents. The text
// sits behind a mutex because the logging layer may append from any thread;
// each method takes the lock exactly once and never logs while holding it.

use std::io;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Inner {
    text: String,
    revision: u64,
}

/// Handle to a mutable, ordered block of log text.
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    inner: Arc<Mutex<Inner>>,
}

impl LogBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer pre-filled with `text`.
    pub fn from_text(text: impl Into<String>) -> Self {
        let buffer = Self::new();
        buffer.set_text(text);
        buffer
    }

    // A writer that panicked mid-append leaves valid UTF-8 behind, so a
    // poisoned lock is still safe to read.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Replace the whole contents.
    pub fn set_text(&self, text: impl Into<String>) {
        let mut inner = self.lock();
        inner.text = text.into();
        inner.revision += 1;
    }

    /// Append `text` to the end of the buffer.
    pub fn append(&self, text: &str) {
        if text.is_empty() {
            return;
        }
        let mut inner = self.lock();
        inner.text.push_str(text);
        inner.revision += 1;
    }

    /// Copy of the full contents.
    pub fn text(&self) -> String {
        self.lock().text.clone()
    }

    /// Copy of the full contents together with the revision they belong to.
    pub fn snapshot(&self) -> (String, u64) {
        let inner = self.lock();
        (inner.text.clone(), inner.revision)
    }

    /// Text between two byte offsets, clamped to the buffer and to char
    /// boundaries. Returns an empty string for an inverted range.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let inner = self.lock();
        let text = &inner.text;
        let end = floor_char_boundary(text, end.min(text.len()));
        let start = floor_char_boundary(text, start.min(end));
        text[start..end].to_string()
    }

    /// Offset of the first character (always 0).
    pub fn start(&self) -> usize {
        0
    }

    /// Offset one past the last byte.
    pub fn end(&self) -> usize {
        self.len()
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.lock().text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().text.is_empty()
    }

    /// Counter bumped by every mutation.
    pub fn revision(&self) -> u64 {
        self.lock().revision
    }

    /// An `io::Write` adaptor that appends everything written to it.
    pub fn writer(&self) -> BufferWriter {
        BufferWriter {
            buffer: self.clone(),
        }
    }
}

fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    while index > 0 && !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Appending writer returned by [`LogBuffer::writer`].
///
/// Invalid UTF-8 is replaced rather than rejected so a misbehaving producer
/// never loses the rest of its output.
#[derive(Debug, Clone)]
pub struct BufferWriter {
    buffer: LogBuffer,
}

impl io::Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.append(&String::from_utf8_lossy(buf));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
