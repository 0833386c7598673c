//! Error type shared by the editor core.
//!
//! The heading command itself is total and never fails. Errors only come
//! from the edges: reading or writing files, parsing user-typed positions,
//! and `:set` directives naming options we don't know.

use std::io;

use thiserror::Error;

/// Everything that can go wrong in `n-editor`.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A `LINE[:COL]` string that isn't two positive integers.
    #[error("invalid position `{0}` (expected LINE[:COL], 1-indexed)")]
    InvalidPosition(String),

    /// A `:set` directive for an option that doesn't exist.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// A `:set` directive that is valid syntax but wrong for the option,
    /// e.g. `:set readonly=3`.
    #[error("invalid value for {option}: {value}")]
    InvalidValue { option: String, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
