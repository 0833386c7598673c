// SPDX-License-Identifier: MIT
//
// n-mark — cycle Markdown heading levels from the command line.
//
// This binary is a thin host around n-editor: it loads a file into a Surface,
// points the selection at the requested lines, and fires the heading command
// the same way a key binding would. Each invocation flows through:
//
//   args → Buffer::from_file → Surface (selection, options)
//        → HeadingCommand::run × times → stdout | save in place
//
// Logging goes to stderr (filter via N_MARK_LOG, default `warn`) so stdout
// carries nothing but the document.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use n_editor::buffer::Buffer;
use n_editor::command::{Handled, HeadingCommand};
use n_editor::host::EditorHost;
use n_editor::position::{Position, Range};
use n_editor::surface::Surface;

/// Environment variable holding the tracing filter.
const LOG_ENV: &str = "N_MARK_LOG";

// ─── Arguments ──────────────────────────────────────────────────────────────

/// Cycle Markdown heading levels (# → ## → … → ###### → #) on a range of lines.
#[derive(Parser, Debug)]
#[command(name = "n-mark", version)]
struct Args {
    /// Markdown file to edit.
    path: PathBuf,

    /// Selection start as LINE[:COL], 1-indexed.
    #[arg(long, value_name = "LINE[:COL]", default_value = "1:1")]
    from: Position,

    /// Selection end as LINE[:COL], 1-indexed. Defaults to --from.
    #[arg(long, value_name = "LINE[:COL]")]
    to: Option<Position>,

    /// Run the command this many times in a row.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    times: u32,

    /// Apply a `:set` directive before running (repeatable), e.g. `--set ro`.
    #[arg(long = "set", value_name = "DIRECTIVE")]
    set: Vec<String>,

    /// Shorthand for `--set readonly`.
    #[arg(long)]
    readonly: bool,

    /// Save the result back to PATH instead of printing it.
    #[arg(long, short)]
    write: bool,
}

impl Args {
    fn selection(&self) -> Range {
        Range {
            from: self.from,
            to: self.to.unwrap_or(self.from),
        }
    }
}

// ─── Running ────────────────────────────────────────────────────────────────

/// What a run did, for the caller to report.
#[derive(Debug, PartialEq, Eq)]
struct Report {
    /// How many times the command completed. Zero under `readonly`.
    applied: u32,
    /// The selection after the last completed run.
    selection: Range,
}

/// Load, edit, and emit. The edited document goes to `out` unless `--write`
/// is set, in which case it is saved in place.
fn run(args: &Args, out: &mut impl Write) -> Result<Report> {
    let buffer = Buffer::from_file(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))?;
    let mut surface = Surface::new(buffer);

    for directive in &args.set {
        let msg = surface
            .options_mut()
            .set(directive)
            .with_context(|| format!("--set {directive}"))?;
        if let Some(msg) = msg {
            eprintln!("{msg}");
        }
    }
    if args.readonly {
        surface.options_mut().readonly = true;
    }

    surface.set_selection(args.selection());
    let mut report = Report {
        applied: 0,
        selection: surface.selection(),
    };

    for _ in 0..args.times {
        match HeadingCommand.run(&mut surface) {
            Handled::Done(selection) => {
                report.applied += 1;
                report.selection = selection;
            }
            Handled::Pass => {
                eprintln!("n-mark: {}: readonly, nothing changed", args.path.display());
                break;
            }
        }
    }
    info!(
        path = %args.path.display(),
        applied = report.applied,
        selection = %report.selection,
        "done"
    );

    if args.write {
        if surface.buffer().is_modified() {
            surface
                .buffer_mut()
                .save()
                .with_context(|| format!("failed to write {}", args.path.display()))?;
            debug!(path = %args.path.display(), "saved");
        }
    } else {
        out.write_all(surface.buffer().contents().as_bytes())?;
        out.flush()?;
    }

    Ok(report)
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();
    let args = Args::parse();

    let stdout = io::stdout();
    if let Err(e) = run(&args, &mut stdout.lock()) {
        eprintln!("n-mark: {e:#}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    // ── Helpers ───────────────────────────────────────────────────────────

    /// Write `text` to a fresh temp file and return (dir guard, path).
    fn markdown(text: &str) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.md");
        fs::write(&path, text).unwrap();
        (dir, path)
    }

    fn args(path: &std::path::Path, extra: &[&str]) -> Args {
        let mut argv = vec!["n-mark", path.to_str().unwrap()];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    /// Run and capture stdout.
    fn run_capture(args: &Args) -> (Report, String) {
        let mut out = Vec::new();
        let report = run(args, &mut out).unwrap();
        (report, String::from_utf8(out).unwrap())
    }

    // ── Argument parsing ──────────────────────────────────────────────────

    #[test]
    fn defaults_to_caret_on_first_line() {
        let a = args(std::path::Path::new("x.md"), &[]);
        assert_eq!(a.selection(), Range::point(Position::ZERO));
        assert_eq!(a.times, 1);
        assert!(!a.write);
    }

    #[test]
    fn parses_one_indexed_positions() {
        let a = args(std::path::Path::new("x.md"), &["--from", "2:3", "--to", "4"]);
        assert_eq!(
            a.selection(),
            Range::new(Position::new(1, 2), Position::new(3, 0))
        );
    }

    #[test]
    fn rejects_bad_position_and_zero_times() {
        assert!(Args::try_parse_from(["n-mark", "x.md", "--from", "0"]).is_err());
        assert!(Args::try_parse_from(["n-mark", "x.md", "--from", "a:b"]).is_err());
        assert!(Args::try_parse_from(["n-mark", "x.md", "--times", "0"]).is_err());
    }

    // ── Running ───────────────────────────────────────────────────────────

    #[test]
    fn prints_transformed_document() {
        let (_dir, path) = markdown("Title\nbody\n");
        let (report, out) = run_capture(&args(&path, &[]));
        assert_eq!(out, "# Title\nbody\n");
        assert_eq!(report.applied, 1);
        assert_eq!(report.selection, Range::new(Position::ZERO, Position::new(0, 2)));
        // Not written without --write.
        assert_eq!(fs::read_to_string(&path).unwrap(), "Title\nbody\n");
    }

    #[test]
    fn range_of_lines() {
        let (_dir, path) = markdown("one\ntwo\nthree\n");
        let (_, out) = run_capture(&args(&path, &["--from", "1", "--to", "2:3"]));
        assert_eq!(out, "# one\n# two\nthree\n");
    }

    #[test]
    fn times_cycles_through_levels() {
        let (_dir, path) = markdown("Title");
        let (report, out) = run_capture(&args(&path, &["--to", "1:6", "--times", "3"]));
        assert_eq!(out, "### Title");
        assert_eq!(report.applied, 3);
        assert_eq!(report.selection.to, Position::new(0, 9));
    }

    #[test]
    fn write_saves_in_place_keeping_crlf() {
        let (_dir, path) = markdown("## Title\r\nbody\r\n");
        let (_, out) = run_capture(&args(&path, &["--write"]));
        assert!(out.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "### Title\r\nbody\r\n");
    }

    #[test]
    fn write_keeps_mixed_line_endings() {
        let (_dir, path) = markdown("Title\nbody\r\nmore\r\n");
        run_capture(&args(&path, &["--write"]));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "# Title\nbody\r\nmore\r\n"
        );
    }

    #[test]
    fn selection_past_end_clamps_onto_last_line() {
        let (_dir, path) = markdown("one\nthis line is long enough");
        let (report, out) = run_capture(&args(&path, &["--from", "5:10", "--to", "9:2"]));
        assert_eq!(out, "one\n# this line is long enough");
        assert_eq!(
            report.selection,
            Range::new(Position::new(1, 1), Position::new(1, 11))
        );
    }

    #[test]
    fn readonly_leaves_document_alone() {
        let (_dir, path) = markdown("Title");
        let (report, out) = run_capture(&args(&path, &["--readonly", "--write"]));
        assert_eq!(report.applied, 0);
        assert!(out.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "Title");
    }

    #[test]
    fn set_directive_readonly() {
        let (_dir, path) = markdown("Title");
        let (report, out) = run_capture(&args(&path, &["--set", "ro"]));
        assert_eq!(report.applied, 0);
        assert_eq!(out, "Title");
    }

    #[test]
    fn unknown_set_directive_fails() {
        let (_dir, path) = markdown("Title");
        let err = run(&args(&path, &["--set", "number"]), &mut Vec::<u8>::new()).unwrap_err();
        assert!(format!("{err:#}").contains("unknown option: number"));
    }

    #[test]
    fn missing_file_fails_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.md");
        let err = run(&args(&path, &[]), &mut Vec::<u8>::new()).unwrap_err();
        assert!(err.to_string().starts_with("failed to read"));
    }
}
