/// Line/column positions and conversions to char offsets.
use anyhow::{Context, Result};

use crate::buffer::TextBuffer;

/// Represents a position in the text as line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, PartialOrd, Ord)]
pub struct Position {
    /// 0-indexed line number.
    pub line: usize,
    /// 0-indexed column (char offset within the line).
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 1-indexed for humans
        write!(f, "Ln {}, Col {}", self.line + 1, self.col + 1)
    }
}

/// Converts a position to a char index, clamping it to the buffer first.
pub fn pos_to_char(buffer: &TextBuffer, pos: Position) -> Result<usize> {
    let clamped = clamp_position(pos, buffer);
    let line_start = buffer
        .line_to_char(clamped.line)
        .context("converting position to char index")?;
    Ok(line_start + clamped.col)
}

/// Converts a char index to a position. Indices past the end map to the end.
pub fn char_to_pos(buffer: &TextBuffer, char_idx: usize) -> Position {
    let clamped = char_idx.min(buffer.len_chars());
    let line = buffer.char_to_line(clamped).unwrap_or(0);
    let line_start = buffer.line_to_char(line).unwrap_or(0);
    Position::new(line, clamped - line_start)
}

/// Clamps a position so it refers to an existing line and column.
pub fn clamp_position(pos: Position, buffer: &TextBuffer) -> Position {
    if buffer.len_lines() == 0 {
        return Position::default();
    }
    let line = pos.line.min(buffer.len_lines() - 1);
    let line_len = buffer.line_len_chars(line).unwrap_or(0);
    Position::new(line, pos.col.min(line_len))
}
