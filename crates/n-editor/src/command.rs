//! The heading command — cycle Markdown heading levels over a selection.
//!
//! Every line the selection touches moves to its next heading level (see
//! [`cycle_heading`]), even when the selection only covers part of a line.
//! The lines are read, rewritten, and written back as one replace, and the
//! selection end is shifted by however much its line grew or shrank so it
//! keeps pointing at the same text.
//!
//! ```text
//! before:  Title|          selection 0:0 .. 0:5
//! after:   # Title|        selection 0:0 .. 0:7
//! ```
//!
//! # Outcomes
//!
//! The command either completes ([`Handled::Done`]) or, when the surface is
//! read-only, does nothing and returns [`Handled::Pass`] so the dispatcher
//! can fall back to whatever the key would normally do. It never fails.

use tracing::{debug, warn};

use crate::heading::{TextBlock, cycle_heading};
use crate::host::EditorHost;
use crate::position::{LineSpan, Position, Range};

/// What the command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// The lines were rewritten. Carries the selection now active on the
    /// surface.
    Done(Range),

    /// Editing is disabled; nothing changed. The dispatcher should let the
    /// key through.
    Pass,
}

impl Handled {
    /// `false` only for [`Handled::Pass`].
    #[inline]
    #[must_use]
    pub const fn is_handled(self) -> bool {
        matches!(self, Self::Done(_))
    }

    /// The selection after a completed run.
    #[inline]
    #[must_use]
    pub const fn selection(self) -> Option<Range> {
        match self {
            Self::Done(range) => Some(range),
            Self::Pass => None,
        }
    }
}

/// Cycle the heading level of every line under the selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingCommand;

impl HeadingCommand {
    /// Name the command logs under.
    pub const NAME: &'static str = "Heading";

    /// Run against the host's current selection.
    pub fn run<H: EditorHost + ?Sized>(self, host: &mut H) -> Handled {
        let selection = host.selection();
        self.apply(host, selection)
    }

    /// Run against `selection`, which becomes the host's selection afterwards
    /// (with its end column adjusted).
    ///
    /// Lines past the end of the document and columns past the end of their
    /// line are clamped, and the endpoints are then put in order. Only the
    /// end moves with the edit: `from` keeps its clamped position while `to`
    /// shifts by the last line's change in length, saturating at column 0.
    /// When that line shrinks past `from`, the selection handed back is
    /// reversed.
    pub fn apply<H: EditorHost + ?Sized>(self, host: &mut H, selection: Range) -> Handled {
        if host.is_editing_disabled() {
            debug!(command = Self::NAME, "editing disabled, passing through");
            return Handled::Pass;
        }

        let selection = normalize(host, selection);
        let span = LineSpan::of(selection);
        let last_before = host.line_text(span.last);
        let len_before = char_len(&last_before);
        let range = span.to_range(len_before);

        let original = host.text(range);
        let block = TextBlock::split(&original);
        let rewritten = block.map_join(cycle_heading);
        host.replace_range(range, &rewritten);

        let len_after = char_len(&host.line_text(span.last));
        let delta = signed_delta(len_before, len_after);
        let new_selection = Range {
            from: selection.from,
            to: selection.to.shift_col(delta),
        };

        debug!(
            command = Self::NAME,
            first = span.first,
            lines = block.len(),
            delta,
            selection = %new_selection,
            "headings cycled"
        );

        host.set_selection(new_selection);
        host.focus();
        Handled::Done(new_selection)
    }
}

/// Clamp both endpoints into the document, then order them.
fn normalize<H: EditorHost + ?Sized>(host: &H, selection: Range) -> Range {
    let last_line = host.line_count().saturating_sub(1);
    let clamp = |mut pos: Position| {
        pos.line = pos.line.min(last_line);
        pos.col = pos.col.min(char_len(&host.line_text(pos.line)));
        pos
    };
    let clamped = Range {
        from: clamp(selection.from),
        to: clamp(selection.to),
    };
    if clamped != selection {
        warn!(%selection, %clamped, "selection outside document, clamping");
    }

    // Clamping can reverse an ordered selection, so order afterwards.
    if !clamped.is_ordered() {
        warn!(%clamped, "reversed selection, swapping ends");
    }
    Range::ordered(clamped.from, clamped.to)
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[allow(clippy::cast_possible_wrap)]
const fn signed_delta(before: usize, after: usize) -> isize {
    after as isize - before as isize
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
