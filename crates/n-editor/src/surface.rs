//! Surface — a buffer plus the selection, options, and focus around it.
//!
//! This is the in-process [`EditorHost`]: everything a command can observe or
//! change lives on one `Surface` value. Reads take `&self` and the edit takes
//! `&mut self`, so nothing else can touch the buffer between a command's read
//! and its replace.

use tracing::trace;

use crate::buffer::Buffer;
use crate::host::EditorHost;
use crate::options::Options;
use crate::position::{Position, Range};

/// An editable view onto one buffer.
#[derive(Debug)]
pub struct Surface {
    buffer: Buffer,
    selection: Range,
    options: Options,
    focused: bool,
}

impl Surface {
    /// Wrap a buffer with a caret at the origin and default options.
    #[must_use]
    pub const fn new(buffer: Buffer) -> Self {
        Self {
            buffer,
            selection: Range::point(Position::ZERO),
            options: Options { readonly: false },
            focused: false,
        }
    }

    /// Shorthand for `Surface::new(Buffer::from_text(text))`.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::new(Buffer::from_text(text))
    }

    /// Builder-style selection setter.
    #[must_use]
    pub const fn with_selection(mut self, selection: Range) -> Self {
        self.selection = selection;
        self
    }

    #[inline]
    #[must_use]
    pub const fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    #[inline]
    pub const fn buffer_mut(&mut self) -> &mut Buffer {
        &mut self.buffer
    }

    #[inline]
    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    #[inline]
    pub const fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// True once something has called [`EditorHost::focus`].
    #[inline]
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }
}

impl EditorHost for Surface {
    fn is_editing_disabled(&self) -> bool {
        self.options.readonly
    }

    fn selection(&self) -> Range {
        self.selection
    }

    fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    fn line_text(&self, line: usize) -> String {
        self.buffer.line_text(line).unwrap_or_default()
    }

    /// # Panics
    ///
    /// Panics if either endpoint is outside the buffer.
    fn text(&self, range: Range) -> String {
        self.buffer
            .slice(range)
            .expect("text range out of bounds")
            .to_string()
    }

    fn replace_range(&mut self, range: Range, text: &str) {
        trace!(%range, len = text.len(), "replace");
        self.buffer.replace(range, text);
    }

    fn set_selection(&mut self, range: Range) {
        self.selection = range;
    }

    fn focus(&mut self) {
        self.focused = true;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
