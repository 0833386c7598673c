//! Text buffer — the text a [`Surface`](crate::surface::Surface) edits.
//!
//! A `Buffer` wraps a [`ropey::Rope`] with line-oriented accessors,
//! coordinate conversion between `Position` (line, col) and rope char
//! indices, a single replace primitive, file I/O, and metadata tracking
//! (path, modified flag).
//!
//! # Line model
//!
//! Exactly three sequences end a line: `\n`, `\r\n`, and a lone `\r`. Ropey
//! is built without its Unicode line-break extension, so U+2028 and friends
//! are ordinary characters here, the same as in
//! [`TextBlock`](crate::heading::TextBlock).
//!
//! Every line keeps the terminator it was loaded with, and saving writes the
//! rope back unchanged, so a file with mixed endings round-trips as-is.
//!
//! Columns are char offsets. Byte offsets never leak into the public API.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use ropey::{Rope, RopeSlice};

use crate::error::Result;
use crate::position::{Position, Range};

/// A text buffer backed by a rope.
///
/// All positions are 0-indexed `(line, col)` pairs. Columns count Unicode
/// scalar values (chars).
pub struct Buffer {
    rope: Rope,
    path: Option<PathBuf>,
    modified: bool,
}

impl Buffer {
    // -- Construction -------------------------------------------------------

    /// Create a buffer from a string.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            path: None,
            modified: false,
        }
    }

    /// Load a buffer from a file. The buffer starts unmodified.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid UTF-8.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let mut buf = Self::from_text(&text);
        buf.path = Some(path.to_path_buf());
        Ok(buf)
    }

    // -- Text access --------------------------------------------------------

    /// Total number of lines. An empty buffer has 1 line (the empty line),
    /// and a buffer ending with a line break has a trailing empty line.
    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Total character count.
    #[inline]
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// A line including its trailing line ending, or `None` past the end.
    #[inline]
    #[must_use]
    pub fn line(&self, line: usize) -> Option<RopeSlice<'_>> {
        (line < self.rope.len_lines()).then(|| self.rope.line(line))
    }

    /// Number of chars in a line **excluding** the trailing line ending.
    /// Returns `None` if the line doesn't exist.
    #[must_use]
    pub fn line_content_len(&self, line: usize) -> Option<usize> {
        self.line(line).map(|rope_line| {
            let total = rope_line.len_chars();
            match (total, total.checked_sub(1).map(|i| rope_line.char(i))) {
                (0, _) => 0,
                (_, Some('\n')) if total >= 2 && rope_line.char(total - 2) == '\r' => total - 2,
                (_, Some('\n' | '\r')) => total - 1,
                _ => total,
            }
        })
    }

    /// The content of a line, without its line ending.
    #[must_use]
    pub fn line_text(&self, line: usize) -> Option<String> {
        let len = self.line_content_len(line)?;
        self.line(line).map(|l| l.slice(..len).to_string())
    }

    /// A slice of text for the given range. Returns `None` if either
    /// endpoint is out of bounds.
    #[must_use]
    pub fn slice(&self, range: Range) -> Option<RopeSlice<'_>> {
        let from = self.pos_to_char_idx(range.from)?;
        let to = self.pos_to_char_idx(range.to)?;
        Some(self.rope.slice(from..to))
    }

    /// Collect all text into a `String`.
    #[must_use]
    pub fn contents(&self) -> String {
        self.rope.to_string()
    }

    // -- Coordinate conversion ----------------------------------------------

    /// Convert a `Position` to an absolute char index in the rope.
    ///
    /// Returns `None` if the line is out of bounds or the column exceeds the
    /// line's total char count (including line ending). A column equal to the
    /// char count is valid: it is the position just past the last character.
    #[must_use]
    pub fn pos_to_char_idx(&self, pos: Position) -> Option<usize> {
        if pos.line >= self.rope.len_lines() {
            return None;
        }
        let line_start = self.rope.line_to_char(pos.line);
        let line_len = self.rope.line(pos.line).len_chars();
        if pos.col > line_len {
            return None;
        }
        Some(line_start + pos.col)
    }

    // -- Editing ------------------------------------------------------------

    /// Replace the text in a range with new text, as one edit.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is not a valid position.
    pub fn replace(&mut self, range: Range, text: &str) {
        let from = self
            .pos_to_char_idx(range.from)
            .expect("replace range start out of bounds");
        let to = self
            .pos_to_char_idx(range.to)
            .expect("replace range end out of bounds");
        self.rope.remove(from..to);
        self.rope.insert(from, text);
        self.modified = true;
    }

    // -- Metadata -----------------------------------------------------------

    /// True if the buffer has been modified since the last save (or creation).
    #[inline]
    #[must_use]
    pub const fn is_modified(&self) -> bool {
        self.modified
    }

    // -- File I/O -----------------------------------------------------------

    /// Save the buffer to its associated file path.
    ///
    /// # Errors
    ///
    /// Returns an error if no path is set or the write fails.
    pub fn save(&mut self) -> Result<()> {
        let path = self.path.clone().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "buffer has no file path")
        })?;
        self.save_as(&path)
    }

    /// Save the buffer to a specific path, updating the stored path.
    ///
    /// The text is written exactly as the rope holds it.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn save_as(&mut self, path: &Path) -> Result<()> {
        fs::write(path, self.contents())?;
        self.path = Some(path.to_path_buf());
        self.modified = false;
        Ok(())
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("lines", &self.line_count())
            .field("chars", &self.len_chars())
            .field("modified", &self.modified)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // -- Construction -------------------------------------------------------

    #[test]
    fn empty_text_has_one_empty_line() {
        let buf = Buffer::from_text("");
        assert_eq!(buf.len_chars(), 0);
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line_text(0).as_deref(), Some(""));
        assert!(!buf.is_modified());
    }

    #[test]
    fn from_text_counts_trailing_empty_line() {
        let buf = Buffer::from_text("hello\nworld\n");
        assert_eq!(buf.line_count(), 3);
        assert_eq!(buf.line_text(2).as_deref(), Some(""));
    }

    // -- Line access --------------------------------------------------------

    #[test]
    fn line_content_len_strips_each_ending() {
        let buf = Buffer::from_text("ab\ncd\r\nef\rgh");
        assert_eq!(buf.line_count(), 4);
        assert_eq!(buf.line_content_len(0), Some(2));
        assert_eq!(buf.line_content_len(1), Some(2));
        assert_eq!(buf.line_content_len(2), Some(2));
        assert_eq!(buf.line_content_len(3), Some(2));
        assert_eq!(buf.line_content_len(4), None);
    }

    #[test]
    fn line_text_excludes_ending() {
        let buf = Buffer::from_text("# Title\r\nbody");
        assert_eq!(buf.line_text(0).as_deref(), Some("# Title"));
        assert_eq!(buf.line_text(1).as_deref(), Some("body"));
        assert_eq!(buf.line_text(2), None);
    }

    #[test]
    fn unicode_separators_are_not_line_breaks() {
        let buf = Buffer::from_text("a\u{2028}b\u{85}c");
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line_content_len(0), Some(5));
    }

    #[test]
    fn columns_count_chars() {
        let buf = Buffer::from_text("café\n");
        assert_eq!(buf.line_content_len(0), Some(4));
    }

    #[test]
    fn slice_spans_lines() {
        let buf = Buffer::from_text("one\ntwo\nthree");
        let r = Range::new(Position::new(0, 1), Position::new(1, 2));
        assert_eq!(buf.slice(r).unwrap().to_string(), "ne\ntw");
    }

    #[test]
    fn slice_out_of_bounds_is_none() {
        let buf = Buffer::from_text("abc");
        let r = Range::new(Position::new(0, 0), Position::new(3, 0));
        assert!(buf.slice(r).is_none());
    }

    // -- Coordinates --------------------------------------------------------

    #[test]
    fn pos_to_char_idx_allows_end_of_line() {
        let buf = Buffer::from_text("abc\nde");
        assert_eq!(buf.pos_to_char_idx(Position::new(0, 4)), Some(4));
        assert_eq!(buf.pos_to_char_idx(Position::new(0, 5)), None);
        assert_eq!(buf.pos_to_char_idx(Position::new(1, 2)), Some(6));
    }

    // -- Editing ------------------------------------------------------------

    #[test]
    fn replace_multiline_range() {
        let mut buf = Buffer::from_text("one\ntwo\nthree");
        let r = Range::new(Position::new(0, 0), Position::new(1, 3));
        buf.replace(r, "# one\n# two");
        assert_eq!(buf.contents(), "# one\n# two\nthree");
        assert!(buf.is_modified());
    }

    #[test]
    #[should_panic(expected = "replace range end out of bounds")]
    fn replace_out_of_bounds_panics() {
        let mut buf = Buffer::from_text("abc");
        buf.replace(Range::new(Position::ZERO, Position::new(2, 0)), "x");
    }

    #[test]
    fn contents_keep_mixed_endings() {
        let mut buf = Buffer::from_text("a\nb\r\nc\rd");
        buf.replace(Range::new(Position::new(1, 0), Position::new(1, 1)), "B");
        assert_eq!(buf.contents(), "a\nB\r\nc\rd");
    }
}
