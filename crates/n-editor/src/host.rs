//! The capabilities a command needs from the editing surface it runs in.
//!
//! Commands never reach for a global editor. They get an `EditorHost` and go
//! through it for every read and write, so the same command runs against the
//! real [`Surface`](crate::surface::Surface) or a test fake.

use crate::position::Range;

/// A text-editing surface as seen by a command.
///
/// Positions passed in and out use the surface's own coordinates: 0-indexed
/// lines, char columns.
pub trait EditorHost {
    /// True when the surface refuses edits (read-only mode).
    fn is_editing_disabled(&self) -> bool;

    /// The active selection.
    fn selection(&self) -> Range;

    /// Number of lines in the document. Always at least 1.
    fn line_count(&self) -> usize;

    /// Content of line `line`, without its line ending. `line` must be less
    /// than [`line_count`](Self::line_count).
    fn line_text(&self, line: usize) -> String;

    /// The text between `range.from` and `range.to`, line endings included.
    fn text(&self, range: Range) -> String;

    /// Replace the text between `range.from` and `range.to` with `text` as a
    /// single edit.
    fn replace_range(&mut self, range: Range, text: &str);

    /// Make `range` the active selection.
    fn set_selection(&mut self, range: Range);

    /// Give keyboard focus back to the text area.
    fn focus(&mut self);
}
