//! Markdown heading markers — detection and level cycling.
//!
//! A heading marker is a run of `#` characters at the very start of a line
//! followed by exactly one whitespace character: `"## "` is level 2. The
//! whitespace is consumed as part of the marker; anything after it (more
//! spaces included) is the heading text.
//!
//! [`cycle_heading`] bumps a line one level deeper:
//!
//! ```text
//! plain → # → ## → ### → #### → ##### → ###### → # → ...
//! ```
//!
//! Level 6 wraps straight back to level 1, never to plain text. Plain text is
//! only ever the starting state of a line that had no marker.

/// Deepest Markdown heading level.
pub const MAX_LEVEL: usize = 6;

/// Marker strings for levels 1 through 6, indexed by `level - 1`.
pub const HEADING_PREFIXES: [&str; MAX_LEVEL] =
    ["# ", "## ", "### ", "#### ", "##### ", "###### "];

// ---------------------------------------------------------------------------
// Marker detection
// ---------------------------------------------------------------------------

/// A heading marker found at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingMarker {
    /// Number of `#` characters in the run.
    pub level: usize,
    /// Byte length of the marker including its whitespace character. The
    /// heading text is `&line[len..]`.
    pub len: usize,
}

/// Scan `line` for a leading heading marker.
///
/// Counts the leading `#` run, then requires one whitespace character right
/// after it. `"#Title"` and `"#"` have no marker. Runs longer than
/// [`MAX_LEVEL`] are still reported; [`cycle_heading`] decides what to do
/// with them.
#[must_use]
pub fn parse_marker(line: &str) -> Option<HeadingMarker> {
    let level = line.bytes().take_while(|&b| b == b'#').count();
    if level == 0 {
        return None;
    }
    let sep = line[level..].chars().next().filter(|c| c.is_whitespace())?;
    Some(HeadingMarker {
        level,
        len: level + sep.len_utf8(),
    })
}

// ---------------------------------------------------------------------------
// Cycling
// ---------------------------------------------------------------------------

/// Move `line` to its next heading level.
///
/// - No marker: prepend `"# "` to the whole line.
/// - Marker of level `k < 6`: replace it with a level `k + 1` marker.
/// - Marker of level 6 or deeper: replace it with `"# "`.
///
/// Total: every input, including the empty string, produces output.
#[must_use]
pub fn cycle_heading(line: &str) -> String {
    let (level, rest) = match parse_marker(line) {
        None => (1, line),
        Some(m) if m.level >= MAX_LEVEL => (1, &line[m.len..]),
        Some(m) => (m.level + 1, &line[m.len..]),
    };

    let prefix = HEADING_PREFIXES[level - 1];
    let mut out = String::with_capacity(prefix.len() + rest.len());
    out.push_str(prefix);
    out.push_str(rest);
    out
}

// ---------------------------------------------------------------------------
// TextBlock
// ---------------------------------------------------------------------------

/// A run of text split into lines, each remembering its own terminator.
///
/// Splitting and rejoining with an identity map is lossless for any text,
/// whatever mix of `\n`, `\r\n`, and `\r` it contains. The last line
/// has an empty terminator. Text ending in a line break yields a trailing
/// empty line, the same way [`Buffer`](crate::buffer::Buffer) counts lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock<'a> {
    lines: Vec<(&'a str, &'a str)>,
}

impl<'a> TextBlock<'a> {
    /// Split `text` on line-break boundaries.
    #[must_use]
    pub fn split(text: &'a str) -> Self {
        let bytes = text.as_bytes();
        let mut lines = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < bytes.len() {
            let ending_len = match bytes[i] {
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => 2,
                b'\r' | b'\n' => 1,
                _ => {
                    i += 1;
                    continue;
                }
            };
            lines.push((&text[start..i], &text[i..i + ending_len]));
            i += ending_len;
            start = i;
        }
        lines.push((&text[start..], ""));

        Self { lines }
    }

    /// Number of lines. Never zero: empty text is one empty line.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false: a block holds at least one (possibly empty) line.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Run `f` over every line's content and join the results back together
    /// with the original terminators. The line count never changes.
    #[must_use]
    pub fn map_join(&self, mut f: impl FnMut(&str) -> String) -> String {
        let mut out = String::new();
        for &(content, ending) in &self.lines {
            out.push_str(&f(content));
            out.push_str(ending);
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
