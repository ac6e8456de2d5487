//! Bounded line storage and the edit cursor

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Maximum number of lines a buffer holds
pub const MAX_LINES: usize = 100;

/// Maximum characters per line
pub const MAX_LINE_LEN: usize = 255;

/// Cursor position: line index plus column
///
/// The column may sit one past the last character (the append position).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EditCursor {
    pub line: usize,
    pub col: usize,
}

impl EditCursor {
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    pub const fn zero() -> Self {
        Self { line: 0, col: 0 }
    }
}

/// Fixed-capacity line buffer
///
/// Edits never grow the buffer past its limits: a full line drops the
/// incoming character and the final line clamps the newline advance, each
/// reporting `false`. Line usage never decreases; a line can be emptied but
/// not removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    /// An empty buffer holding one empty line
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// Build a buffer from decoded or seeded lines
    ///
    /// Input past the line capacity is dropped; over-long lines are truncated
    /// to the column capacity. An empty input still yields one empty line.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stored: Vec<String> = lines
            .into_iter()
            .take(MAX_LINES)
            .map(|line| line.as_ref().chars().take(MAX_LINE_LEN).collect())
            .collect();
        if stored.is_empty() {
            stored.push(String::new());
        }
        Self { lines: stored }
    }

    /// One past the highest line index ever written
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(|s| s.as_str())
    }

    pub fn line_len(&self, index: usize) -> usize {
        self.lines
            .get(index)
            .map(|s| s.chars().count())
            .unwrap_or(0)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// Insert a character at the cursor and advance the column
    ///
    /// Returns whether the character was accepted. A full line drops the
    /// character; a column past the end of the line is clamped to the append
    /// position first.
    pub fn insert_char(&mut self, cursor: &mut EditCursor, ch: char) -> bool {
        if cursor.line >= MAX_LINES {
            return false;
        }
        self.grow_to(cursor.line);

        let line = &mut self.lines[cursor.line];
        let len = line.chars().count();
        if len >= MAX_LINE_LEN {
            return false;
        }

        let col = cursor.col.min(len);
        let at = byte_index(line, col);
        line.insert(at, ch);
        cursor.col = col + 1;
        true
    }

    /// Delete the character before the cursor within the current line
    ///
    /// Returns whether a character was deleted. At column zero this is a
    /// no-op: lines are never merged.
    pub fn backspace(&mut self, cursor: &mut EditCursor) -> bool {
        if cursor.col == 0 || cursor.line >= self.lines.len() {
            return false;
        }

        let line = &mut self.lines[cursor.line];
        let len = line.chars().count();
        if len == 0 {
            return false;
        }

        let col = cursor.col.min(len);
        let at = byte_index(line, col - 1);
        line.remove(at);
        cursor.col = col - 1;
        true
    }

    /// Terminate the current line at the cursor and move to the next line
    ///
    /// The line is cut at the cursor and the column returns to zero. Returns
    /// whether a new line was reached: on the final line the advance is
    /// clamped and the buffer never scrolls, but the cut and the column reset
    /// still apply.
    pub fn newline(&mut self, cursor: &mut EditCursor) -> bool {
        if cursor.line >= MAX_LINES {
            return false;
        }
        self.grow_to(cursor.line);

        let line = &mut self.lines[cursor.line];
        let col = cursor.col.min(line.chars().count());
        let at = byte_index(line, col);
        line.truncate(at);
        cursor.col = 0;

        if cursor.line + 1 >= MAX_LINES {
            return false;
        }
        cursor.line += 1;
        self.grow_to(cursor.line);
        true
    }

    fn grow_to(&mut self, index: usize) {
        while self.lines.len() <= index {
            self.lines.push(String::new());
        }
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

fn byte_index(s: &str, col: usize) -> usize {
    s.char_indices().nth(col).map(|(i, _)| i).unwrap_or(s.len())
}
