//! # oxide-csvql-core
//!
//! A parser for a small, single-table SQL dialect: `SELECT`, `INSERT INTO`,
//! `UPDATE` and `DELETE FROM` with flat `AND`-joined `WHERE` clauses.
//!
//! Parsing produces a flat [`Query`] record rather than a syntax tree, which
//! is what simple tools over CSV files and key-value tables need.
//!
//! ```rust
//! use oxide_csvql_core::{Operator, QueryType, parse};
//!
//! let query = parse("SELECT a, c AS total FROM 'orders' WHERE a != '1'").unwrap();
//! assert_eq!(query.query_type, QueryType::Select);
//! assert_eq!(query.table_name, "orders");
//! assert_eq!(query.fields, vec!["a", "c"]);
//! assert_eq!(query.aliases, vec!["", "total"]);
//! assert_eq!(query.conditions[0].operator, Operator::Ne);
//! ```
//!
//! ## Errors
//!
//! Every failure carries a message prefixed with the clause it belongs to
//! and the byte offset at which it was detected:
//!
//! ```rust
//! use oxide_csvql_core::parse;
//!
//! let sql = "UPDATE 'a' SET b = 'x'";
//! let err = parse(sql).unwrap_err();
//! assert_eq!(err.message, "at WHERE: WHERE clause is mandatory for UPDATE & DELETE");
//! assert_eq!(err.pos, sql.len());
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;

use tracing::debug;

pub use ast::{Condition, OperandKind, Operator, Query, QueryType};
pub use lexer::{Cursor, Reserved, Span, Token, TokenKind};
pub use parser::{BatchError, ErrorKind, ParseError, Parser, State};

/// Parses a single statement.
///
/// # Errors
///
/// Returns a `ParseError` describing the first problem found.
pub fn parse(sql: &str) -> Result<Query, ParseError> {
    Parser::new(sql).parse()
}

/// Parses a single statement, keeping the partially built query on failure.
#[must_use]
pub fn parse_partial(sql: &str) -> (Query, Option<ParseError>) {
    Parser::new(sql).parse_partial()
}

/// Parses statements in order, stopping at the first one that fails.
///
/// # Errors
///
/// Returns a `BatchError` with the failing statement's index, its error,
/// every query parsed before it, and the partial query of the failing one.
pub fn parse_many<I, S>(statements: I) -> Result<Vec<Query>, BatchError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed = Vec::new();
    for (index, sql) in statements.into_iter().enumerate() {
        match Parser::new(sql.as_ref()).parse_partial() {
            (query, None) => parsed.push(query),
            (partial, Some(source)) => {
                debug!(index, error = %source, "Batch stopped");
                return Err(BatchError {
                    index,
                    source,
                    parsed,
                    partial,
                });
            }
        }
    }
    Ok(parsed)
}
