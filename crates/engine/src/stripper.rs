//! `//` and `/* */` comment removal.
//!
//! The stripper is a single regular expression pass, not a lexer. It has no
//! notion of string or character literals, so a marker inside a literal is
//! removed like any other comment:
//!
//! ```text
//! var url = "http://example.com";   ->   var url = "http:
//! ```
//!
//! Callers that need literal-aware stripping must not use this module.

use crate::error::Result;
use regex::Regex;
use std::borrow::Cow;

/// Line comment alternative first, then block comment.
///
/// - `s`: `.` crosses line ends so a block comment may span lines.
/// - `m` + lazy `.*?$`: a line comment stops at the first line end.
/// - `R`: `$` also stops before `\r\n`, so the terminator is kept whole.
///
/// An unterminated `/*` has no `*/` to reach and is not matched.
const COMMENT_PATTERN: &str = r"(?msR)//.*?$|/\*.*?\*/";

/// Stateless comment remover. Cheap to share; compile once per run.
#[derive(Debug, Clone)]
pub struct CommentStripper {
    pattern: Regex,
}

impl CommentStripper {
    /// Compiles the comment pattern.
    ///
    /// # Errors
    /// Returns `EngineError::Regex` if the pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(COMMENT_PATTERN)?,
        })
    }

    /// Removes every comment span from `text`.
    ///
    /// Matches are found in one left-to-right scan and deleted outright.
    /// Everything outside a match is returned unchanged, including the
    /// line terminator that ends a line comment. When nothing matches the
    /// input is handed back borrowed.
    #[must_use]
    pub fn strip<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(text, "")
    }
}
