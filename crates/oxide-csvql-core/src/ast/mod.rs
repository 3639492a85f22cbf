//! The statement representation produced by the parser.

mod condition;
mod query;

use std::fmt::{self, Write};

pub use condition::{Condition, OperandKind, Operator};
pub use query::{Query, QueryType};

/// Writes `s` single-quoted, escaping `'` and `\` with a backslash.
pub(crate) fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('\'')?;
    for c in s.chars() {
        if matches!(c, '\'' | '\\') {
            f.write_char('\\')?;
        }
        f.write_char(c)?;
    }
    f.write_char('\'')
}
