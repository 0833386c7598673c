//! Text position, range, and line-span types.
//!
//! All coordinates are **0-indexed**. Line 0 is the first line, column 0 is the
//! first character. Columns count Unicode scalar values (chars), not bytes or
//! UTF-16 units. This matches how `ropey` indexes text.
//!
//! The only 1-indexed surface is the `LINE:COL` text form (`Display` and
//! `FromStr`), which is what users type on the command line and read in
//! messages.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A position in a text buffer: (line, column), both 0-indexed.
///
/// `col` is the char offset from the start of the line, **not** a byte offset.
/// A column equal to the line's content length is the end-of-line position.
///
/// # Ordering
///
/// Positions are ordered lexicographically: line first, then column.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    /// The origin — line 0, column 0.
    pub const ZERO: Self = Self { line: 0, col: 0 };

    /// Create a new position.
    #[inline]
    #[must_use]
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    /// The same line with the column shifted by `delta` chars. Saturates at
    /// column 0 rather than wrapping.
    #[inline]
    #[must_use]
    pub const fn shift_col(self, delta: isize) -> Self {
        Self {
            line: self.line,
            col: self.col.saturating_add_signed(delta),
        }
    }
}

impl Ord for Position {
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.line
            .cmp(&other.line)
            .then(self.col.cmp(&other.col))
    }
}

impl PartialOrd for Position {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pos({}:{})", self.line, self.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}

/// Parses the 1-indexed `LINE[:COL]` form. A missing column means column 1.
impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidPosition(s.to_string());
        let one_based = |part: &str| -> Result<usize, Error> {
            match part.trim().parse::<usize>() {
                Ok(n) if n > 0 => Ok(n - 1),
                _ => Err(invalid()),
            }
        };

        let (line, col) = match s.split_once(':') {
            Some((line, col)) => (one_based(line)?, one_based(col)?),
            None => (one_based(s)?, 0),
        };
        Ok(Self::new(line, col))
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A selection in a text buffer: `from` up to `to`, in document order.
///
/// A caret is a range with `from == to`. Ranges may span many lines. Use
/// [`Range::new`] when the order is known, [`Range::ordered`] on untrusted
/// input (a selection dragged backwards, a host handing us swapped ends).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    pub from: Position,
    pub to: Position,
}

impl Range {
    /// Create a range. Panics in debug if `from > to`.
    #[inline]
    #[must_use]
    pub const fn new(from: Position, to: Position) -> Self {
        debug_assert!(
            from.line < to.line || (from.line == to.line && from.col <= to.col),
            "Range::new requires from <= to"
        );
        Self { from, to }
    }

    /// Create a range from two arbitrary positions, swapping if needed so
    /// that `from <= to`.
    #[inline]
    #[must_use]
    pub fn ordered(a: Position, b: Position) -> Self {
        if a <= b {
            Self { from: a, to: b }
        } else {
            Self { from: b, to: a }
        }
    }

    /// A zero-width range (caret) at the given position.
    #[inline]
    #[must_use]
    pub const fn point(pos: Position) -> Self {
        Self { from: pos, to: pos }
    }

    /// True when `from <= to`.
    #[inline]
    #[must_use]
    pub fn is_ordered(self) -> bool {
        self.from <= self.to
    }
}

impl fmt::Debug for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Range({}:{} .. {}:{})",
            self.from.line, self.from.col, self.to.line, self.to.col
        )
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

// ---------------------------------------------------------------------------
// LineSpan
// ---------------------------------------------------------------------------

/// The whole lines a selection touches, `first..=last`.
///
/// Line-oriented commands never care where inside a line the selection
/// starts or stops: a caret in the middle of a line still operates on the
/// full line, and a selection ending at column 0 of a line still includes
/// that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineSpan {
    pub first: usize,
    pub last: usize,
}

impl LineSpan {
    /// The lines spanned by an ordered range.
    #[inline]
    #[must_use]
    pub const fn of(range: Range) -> Self {
        Self {
            first: range.from.line,
            last: range.to.line,
        }
    }

    /// The span as a character range: column 0 of the first line through
    /// `last_len` (the content length of the last line).
    #[inline]
    #[must_use]
    pub const fn to_range(self, last_len: usize) -> Range {
        Range {
            from: Position::new(self.first, 0),
            to: Position::new(self.last, last_len),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
