//! Surface options — the `:set` system.
//!
//! Parses Vim-style `:set` directives and applies them to an [`Options`]
//! value. The surface reads its options to answer
//! [`EditorHost::is_editing_disabled`](crate::host::EditorHost::is_editing_disabled).
//!
//! # Supported syntax
//!
//! | Syntax           | Effect                        |
//! |------------------|-------------------------------|
//! | `:set option`    | Enable boolean                |
//! | `:set nooption`  | Disable boolean               |
//! | `:set option!`   | Toggle boolean                |
//! | `:set option?`   | Query current value           |
//! | `:set`           | Show changed options          |
//! | `:set all`       | Show all options              |
//!
//! # Option names
//!
//! | Full name  | Abbrev | Type | Default | Effect                          |
//! |------------|--------|------|---------|---------------------------------|
//! | `readonly` | `ro`   | bool | false   | Commands pass instead of editing |

use crate::error::{Error, Result};

/// A parsed `:set` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetDirective {
    /// `:set option` — enable a boolean option.
    On(String),

    /// `:set nooption` — disable a boolean option.
    Off(String),

    /// `:set option!` — toggle a boolean option.
    Toggle(String),

    /// `:set option?` — query the current value.
    Query(String),

    /// `:set option=value` — assign a value.
    Assign(String, String),

    /// `:set` with no arguments — show changed options.
    ShowChanged,

    /// `:set all` — show all options.
    ShowAll,
}

/// Canonical full name for a known boolean option, resolving abbreviations.
#[must_use]
pub fn canonical_bool_option(name: &str) -> Option<&'static str> {
    match name {
        "readonly" | "ro" => Some("readonly"),
        _ => None,
    }
}

/// Returns `true` if `name` is a known boolean option (full name or abbreviation).
#[must_use]
pub fn is_bool_option(name: &str) -> bool {
    canonical_bool_option(name).is_some()
}

/// Parse the full `:set` arguments string into directives.
///
/// An empty argument string produces [`SetDirective::ShowChanged`].
#[must_use]
pub fn parse_set(args: &str) -> Vec<SetDirective> {
    let trimmed = args.trim();
    if trimmed.is_empty() {
        return vec![SetDirective::ShowChanged];
    }
    trimmed.split_whitespace().map(parse_set_arg).collect()
}

/// Parse a single `:set` argument into a directive.
#[must_use]
pub fn parse_set_arg(arg: &str) -> SetDirective {
    if arg == "all" {
        return SetDirective::ShowAll;
    }

    if let Some((name, value)) = arg.split_once('=') {
        return SetDirective::Assign(name.to_string(), value.to_string());
    }

    if let Some(name) = arg.strip_suffix('?') {
        return SetDirective::Query(name.to_string());
    }

    if let Some(name) = arg.strip_suffix('!') {
        return SetDirective::Toggle(name.to_string());
    }

    // Only strip "no" when the rest is a real option name.
    if let Some(name) = arg.strip_prefix("no").filter(|n| is_bool_option(n)) {
        return SetDirective::Off(name.to_string());
    }

    SetDirective::On(arg.to_string())
}

/// Format a boolean option for display: `"name"` or `"noname"`.
#[must_use]
pub fn format_bool(name: &str, value: bool) -> String {
    if value {
        name.to_string()
    } else {
        format!("no{name}")
    }
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Option values for one editing surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Refuse edits. Commands report "not handled" instead of mutating.
    pub readonly: bool,
}

impl Options {
    /// Apply one directive. Returns a message for directives that display
    /// something (`?`, bare `:set`, `:set all`).
    ///
    /// # Errors
    ///
    /// [`Error::UnknownOption`] for names we don't know, and
    /// [`Error::InvalidValue`] for `=` assignments, which no boolean accepts.
    pub fn apply(&mut self, directive: &SetDirective) -> Result<Option<String>> {
        match directive {
            SetDirective::On(name) => *self.flag_mut(name)? = true,
            SetDirective::Off(name) => *self.flag_mut(name)? = false,
            SetDirective::Toggle(name) => {
                let flag = self.flag_mut(name)?;
                *flag = !*flag;
            }
            SetDirective::Query(name) => {
                let full = canonical(name)?;
                return Ok(Some(format_bool(full, self.readonly)));
            }
            SetDirective::Assign(name, value) => {
                canonical(name)?;
                return Err(Error::InvalidValue {
                    option: name.clone(),
                    value: value.clone(),
                });
            }
            SetDirective::ShowChanged => {
                let shown = if *self == Self::default() {
                    String::new()
                } else {
                    format_bool("readonly", self.readonly)
                };
                return Ok(Some(shown));
            }
            SetDirective::ShowAll => return Ok(Some(format_bool("readonly", self.readonly))),
        }
        Ok(None)
    }

    /// Parse and apply a whole `:set` argument string, stopping at the first
    /// error. Messages from display directives are joined with spaces.
    ///
    /// # Errors
    ///
    /// Same as [`apply`](Self::apply).
    pub fn set(&mut self, args: &str) -> Result<Option<String>> {
        let mut messages = Vec::new();
        for directive in parse_set(args) {
            if let Some(msg) = self.apply(&directive)? {
                messages.push(msg);
            }
        }
        Ok((!messages.is_empty()).then(|| messages.join(" ")))
    }

    fn flag_mut(&mut self, name: &str) -> Result<&mut bool> {
        match canonical(name)? {
            "readonly" => Ok(&mut self.readonly),
            other => Err(Error::UnknownOption(other.to_string())),
        }
    }
}

fn canonical(name: &str) -> Result<&'static str> {
    canonical_bool_option(name).ok_or_else(|| Error::UnknownOption(name.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
