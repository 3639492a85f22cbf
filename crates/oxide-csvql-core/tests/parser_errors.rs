//! Tests for error messages, kinds and positions.

mod common;
use common::*;

use oxide_csvql_core::{ErrorKind, QueryType, parse_partial};

#[test]
fn error_empty_input() {
    let err = assert_err("", "query type cannot be empty");
    assert_eq!(err.kind, ErrorKind::EmptyInput);
    assert_eq!(err.pos, 0);
}

#[test]
fn error_whitespace_only() {
    let err = assert_err("   \n\t", "query type cannot be empty");
    assert_eq!(err.kind, ErrorKind::EmptyInput);
}

#[test]
fn error_unknown_statement() {
    let err = assert_err("DROP TABLE 'a'", "invalid query type");
    assert_eq!(err.kind, ErrorKind::Syntax);
    assert_eq!(err.pos, 0);
}

#[test]
fn error_keyword_needs_boundary() {
    assert_err("SELECTa FROM 'b'", "invalid query type");
}

#[test]
fn error_select_without_from() {
    let err = assert_err("SELECT", "table name cannot be empty");
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[test]
fn error_select_without_fields() {
    assert_err("SELECT FROM 'a'", "at SELECT: expected field to SELECT");
}

#[test]
fn error_select_comma_before_from() {
    assert_err("SELECT b, FROM 'a'", "at SELECT: expected field to SELECT");
}

#[test]
fn error_select_trailing_comma() {
    let sql = "SELECT a,";
    let err = assert_err(sql, "at SELECT: expected field to SELECT");
    assert_eq!(err.kind, ErrorKind::Syntax);
    assert_eq!(err.pos, sql.len());
}

#[test]
fn error_select_from_without_table() {
    assert_err("SELECT a FROM", "table name cannot be empty");
}

#[test]
fn error_select_empty_quoted_table() {
    assert_err("SELECT a FROM ''", "at SELECT: expected quoted table name");
}

#[test]
fn error_select_missing_comma() {
    assert_err("SELECT a b FROM 't'", "at SELECT: expected comma or FROM");
}

#[test]
fn error_unterminated_literal() {
    let sql = "SELECT a FROM 'b' WHERE a = 'oops";
    let err = assert_err(
        sql,
        "at WHERE: expected quoted value (unterminated quoted literal)",
    );
    assert_eq!(err.pos, sql.find("'oops").unwrap());
}

#[test]
fn error_malformed_number() {
    assert_err(
        "SELECT a FROM 'b' WHERE a = 12ab",
        "at WHERE: expected quoted value (malformed number: 12ab)",
    );
}

#[test]
fn error_position_points_at_token() {
    let sql = "UPDATE 'a' SET b = WHERE";
    let err = assert_err(sql, "at UPDATE: expected quoted value");
    assert_eq!(err.pos, sql.find("WHERE").unwrap());
}

#[test]
fn error_position_counts_leading_whitespace() {
    let sql = "   SELECT FROM 'a'";
    let err = assert_err(sql, "at SELECT: expected field to SELECT");
    assert_eq!(err.pos, 10);
}

#[test]
fn error_display_is_message() {
    let err = parse_err("DELETE FROM 'a'");
    assert_eq!(
        err.to_string(),
        "at WHERE: WHERE clause is mandatory for UPDATE & DELETE"
    );
}

#[test]
fn error_render_diagnostic() {
    let sql = "SELECT a FROM 'b' WHERE a ! '1'";
    let err = parse_err(sql);
    assert_eq!(
        err.render(sql),
        "SELECT a FROM 'b' WHERE a ! '1'\n\
         \x20                         ^\n\
         at WHERE: unknown operator (unexpected character: !)"
    );
}

#[test]
fn error_partial_query_returned() {
    let (query, err) = parse_partial("UPDATE 'a' SET b = 'x', c");
    assert_eq!(query.query_type, QueryType::Update);
    assert_eq!(query.table_name, "a");
    assert_eq!(query.updates["b"], "x");
    assert_eq!(
        err.map(|e| e.message).as_deref(),
        Some("at WHERE: WHERE clause is mandatory for UPDATE & DELETE")
    );
}

#[test]
fn error_partial_ok_has_no_error() {
    let (query, err) = parse_partial("SELECT a FROM 'b'");
    assert!(err.is_none());
    assert_eq!(query, parse_ok("SELECT a FROM 'b'"));
}

#[test]
fn error_position_ignores_trailing_whitespace() {
    let sql = "DELETE FROM 'a'   \n";
    let err = assert_err(sql, "at WHERE: WHERE clause is mandatory for UPDATE & DELETE");
    assert_eq!(err.pos, sql.trim_end().len());
    assert_eq!(
        err.render(sql),
        "DELETE FROM 'a'   \n\
         \x20              ^\n\
         at WHERE: WHERE clause is mandatory for UPDATE & DELETE"
    );
}

#[test]
fn error_missing_right_operand_is_syntax() {
    let sql = "DELETE FROM 'a' WHERE b != ";
    let err = assert_err(sql, "at WHERE: expected quoted value");
    assert_eq!(err.kind, ErrorKind::Syntax);
    assert_eq!(err.pos, sql.trim_end().len());
}
