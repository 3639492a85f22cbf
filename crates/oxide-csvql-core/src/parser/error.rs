//! Parser error types.

use std::io;

use serde::{Deserialize, Serialize};

use crate::ast::Query;

/// The stage that rejected a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A token did not fit the grammar, or the statement stopped mid-clause.
    Syntax,
    /// The scan finished but the statement breaks a structural rule.
    Validation,
    /// No statement keyword was found at all.
    EmptyInput,
}

/// A parse error.
///
/// The message is the error's identity; `pos` is the byte offset into the
/// parsed text at which the failure was detected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    /// The error message, prefixed with the clause it belongs to.
    pub message: String,
    /// Byte offset of the failure.
    pub pos: usize,
    /// Which stage produced the error.
    pub kind: ErrorKind,
}

impl ParseError {
    /// Creates a syntax error.
    #[must_use]
    pub fn syntax(message: impl Into<String>, pos: usize) -> Self {
        Self {
            message: message.into(),
            pos,
            kind: ErrorKind::Syntax,
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>, pos: usize) -> Self {
        Self {
            message: message.into(),
            pos,
            kind: ErrorKind::Validation,
        }
    }

    /// Creates the error for input without a statement keyword.
    #[must_use]
    pub fn empty_input(pos: usize) -> Self {
        Self {
            message: String::from("query type cannot be empty"),
            pos,
            kind: ErrorKind::EmptyInput,
        }
    }

    /// Renders a caret diagnostic: the line of `sql` containing the error,
    /// a caret under the offending column, then the message.
    #[must_use]
    pub fn render(&self, sql: &str) -> String {
        let mut pos = self.pos.min(sql.len());
        while !sql.is_char_boundary(pos) {
            pos -= 1;
        }

        let line_start = sql[..pos].rfind('\n').map_or(0, |i| i + 1);
        let line_end = sql[pos..].find('\n').map_or(sql.len(), |i| pos + i);
        let line = sql[line_start..line_end].trim_end_matches('\r');
        let column = sql[line_start..pos].chars().count();

        format!("{line}\n{}^\n{}", " ".repeat(column), self.message)
    }

    /// Writes [`ParseError::render`] followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_diagnostic<W: io::Write>(&self, sql: &str, w: &mut W) -> io::Result<()> {
        writeln!(w, "{}", self.render(sql))
    }
}

/// Failure of [`crate::parse_many`].
///
/// Carries the statements parsed before the failing one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("statement {} failed to parse: {source}", .index + 1)]
pub struct BatchError {
    /// Zero-based index of the failing statement.
    pub index: usize,
    /// Why it failed.
    #[source]
    pub source: ParseError,
    /// The successfully parsed statements before `index`.
    pub parsed: Vec<Query>,
    /// Whatever was built from the failing statement before it was rejected.
    pub partial: Query,
}
