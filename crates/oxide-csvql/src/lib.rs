//! Command-line front end for `oxide-csvql-core`.
//!
//! The `csvql` binary parses statements given on the command line or read
//! from a file and prints the resulting queries. The commands live here,
//! writing to caller-supplied streams, so they can be tested without a
//! terminal.

pub mod error;
pub mod input;
pub mod output;

use std::io::Write;

use oxide_csvql_core::{Cursor, parse_many};
use tracing::{debug, info};

pub use error::{CliError, Result};
pub use output::Format;

use crate::input::statements;
use crate::output::{render, render_token};

/// Parses `sql` in order and prints every query to `out`.
///
/// Queries parsed before a failure are still printed; the failing
/// statement's diagnostic goes to `diag`.
///
/// # Errors
///
/// Returns `CliError::Rejected` for the first statement that fails, or an
/// IO/serialization error while printing.
pub fn parse_statements<W, E>(
    sql: &[String],
    format: Format,
    out: &mut W,
    diag: &mut E,
) -> Result<()>
where
    W: Write,
    E: Write,
{
    let (queries, failure) = match parse_many(sql) {
        Ok(queries) => (queries, None),
        Err(err) => (err.parsed, Some((err.index, err.source, err.partial))),
    };

    for query in &queries {
        writeln!(out, "{}", render(query, format)?)?;
    }

    let Some((index, error, partial)) = failure else {
        debug!(count = queries.len(), "Parsed statements");
        return Ok(());
    };

    let statement = &sql[index];
    debug!(?partial, "Partially parsed statement");

    if sql.len() > 1 {
        writeln!(diag, "statement {}:", index + 1)?;
    }
    error.write_diagnostic(statement, diag)?;
    Err(CliError::Rejected { index: index + 1 })
}

/// Checks a file of statements, one per non-blank line.
///
/// Prints the number of valid statements to `out`, or the diagnostic of
/// the first invalid one, with its line number, to `diag`.
///
/// # Errors
///
/// Returns `CliError::Rejected` carrying the line number of the first
/// invalid statement.
pub fn check_source<W, E>(text: &str, out: &mut W, diag: &mut E) -> Result<usize>
where
    W: Write,
    E: Write,
{
    let lines: Vec<(usize, &str)> = statements(text).collect();

    match parse_many(lines.iter().map(|&(_, statement)| statement)) {
        Ok(queries) => {
            info!(count = queries.len(), "Check passed");
            writeln!(out, "{} statement(s) OK", queries.len())?;
            Ok(queries.len())
        }
        Err(err) => {
            let (line, statement) = lines[err.index];
            writeln!(diag, "line {line}:")?;
            err.source.write_diagnostic(statement, diag)?;
            Err(CliError::Rejected { index: line })
        }
    }
}

/// Prints the token stream of `sql`, one token per line.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn print_tokens<W: Write>(sql: &str, out: &mut W) -> Result<()> {
    for token in Cursor::new(sql).tokenize() {
        writeln!(out, "{}", render_token(&token, sql))?;
    }
    Ok(())
}
