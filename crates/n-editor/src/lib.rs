//! # n-editor — Editor core for n-mark
//!
//! The building blocks behind the heading command:
//!
//! - **[`position`]** — `Position` (line, col), `Range`, and `LineSpan`, 0-indexed
//! - **[`buffer`]** — `Buffer` wrapping a rope with line access, replace, and file I/O
//! - **[`heading`]** — heading marker detection, level cycling, and `TextBlock`
//! - **[`host`]** — the `EditorHost` trait commands talk to
//! - **[`surface`]** — `Surface`, the in-process host (buffer + selection + options)
//! - **[`command`]** — `HeadingCommand`, the selection-wide heading cycler
//! - **[`options`]** — the `:set` parser and `Options`
//! - **[`error`]** — the crate's `Error` type

pub mod buffer;
pub mod command;
pub mod error;
pub mod heading;
pub mod host;
pub mod options;
pub mod position;
pub mod surface;

pub use error::{Error, Result};
