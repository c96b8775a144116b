//! Document model combining a text buffer and a cursor.
//!
//! A `Document` is the originator the editing session snapshots. Each
//! editing method returns whether the content actually changed, so the
//! session only records snapshots for real edits.

use ropey::Rope;

use crate::buffer::TextBuffer;
use crate::cursor::{char_to_pos, clamp_position, pos_to_char, Position};
use crate::originator::Originator;

/// Whole-document state captured for undo/redo.
///
/// Holds a rope clone, which shares structure with the live buffer.
#[derive(Debug, Clone)]
pub struct DocumentSnapshot {
    content: Rope,
    cursor: Position,
}

impl DocumentSnapshot {
    /// Returns the captured text.
    pub fn text(&self) -> String {
        self.content.to_string()
    }

    /// Returns the captured cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Number of characters in the captured text.
    pub fn len_chars(&self) -> usize {
        self.content.len_chars()
    }
}

/// A single text document with its cursor.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// The text buffer.
    buffer: TextBuffer,
    /// Current cursor position, always within the buffer.
    cursor: Position,
}

impl From<&str> for Document {
    /// Creates a document with the cursor at the end of `text`.
    fn from(text: &str) -> Self {
        let buffer = TextBuffer::from(text);
        let cursor = char_to_pos(&buffer, buffer.len_chars());
        Self { buffer, cursor }
    }
}

impl Document {
    /// Creates a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the full text.
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Returns the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    fn cursor_char(&self) -> usize {
        pos_to_char(&self.buffer, self.cursor).unwrap_or(0)
    }

    /// Inserts text at the cursor and moves the cursor past it.
    pub fn insert_text(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let char_idx = self.cursor_char();
        if let Err(e) = self.buffer.insert(char_idx, text) {
            tracing::warn!("Insert at {char_idx} failed: {e}");
            return false;
        }
        self.cursor = char_to_pos(&self.buffer, char_idx + text.chars().count());
        true
    }

    /// Inserts a newline at the cursor.
    pub fn insert_newline(&mut self) -> bool {
        self.insert_text("\n")
    }

    /// Deletes up to `count` characters before the cursor.
    pub fn backspace(&mut self, count: usize) -> bool {
        let end = self.cursor_char();
        let start = end.saturating_sub(count);
        if start == end {
            return false;
        }
        if let Err(e) = self.buffer.remove(start, end) {
            tracing::warn!("Backspace over {start}..{end} failed: {e}");
            return false;
        }
        self.cursor = char_to_pos(&self.buffer, start);
        true
    }

    /// Deletes up to `count` characters after the cursor.
    pub fn delete_forward(&mut self, count: usize) -> bool {
        let start = self.cursor_char();
        let end = (start + count).min(self.buffer.len_chars());
        if start == end {
            return false;
        }
        if let Err(e) = self.buffer.remove(start, end) {
            tracing::warn!("Delete over {start}..{end} failed: {e}");
            return false;
        }
        true
    }

    /// Replaces the whole content and puts the cursor at the end.
    pub fn replace_all(&mut self, text: &str) -> bool {
        if self.text() == text {
            return false;
        }
        self.buffer = TextBuffer::from(text);
        self.cursor = char_to_pos(&self.buffer, self.buffer.len_chars());
        true
    }

    /// Moves the cursor to `pos`, clamped to the buffer.
    pub fn move_to(&mut self, pos: Position) {
        self.cursor = clamp_position(pos, &self.buffer);
    }

    /// Moves the cursor one character left, wrapping to the previous line.
    pub fn move_left(&mut self) {
        let idx = self.cursor_char();
        self.cursor = char_to_pos(&self.buffer, idx.saturating_sub(1));
    }

    /// Moves the cursor one character right, wrapping to the next line.
    pub fn move_right(&mut self) {
        let idx = self.cursor_char();
        self.cursor = char_to_pos(&self.buffer, idx + 1);
    }

    /// Moves the cursor to the start of the document.
    pub fn move_to_start(&mut self) {
        self.cursor = Position::default();
    }

    /// Moves the cursor to the end of the document.
    pub fn move_to_end(&mut self) {
        self.cursor = char_to_pos(&self.buffer, self.buffer.len_chars());
    }
}

impl Originator for Document {
    type Snapshot = DocumentSnapshot;

    fn create_snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            content: self.buffer.rope().clone(),
            cursor: self.cursor,
        }
    }

    fn restore(&mut self, snapshot: &DocumentSnapshot) {
        self.buffer = TextBuffer::from(snapshot.content.clone());
        self.cursor = clamp_position(snapshot.cursor, &self.buffer);
    }
}
