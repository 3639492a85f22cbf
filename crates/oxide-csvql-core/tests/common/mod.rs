#![allow(dead_code)]

use oxide_csvql_core::{ParseError, Query, QueryType};

pub fn parse_ok(sql: &str) -> Query {
    oxide_csvql_core::parse(sql)
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    oxide_csvql_core::parse(sql)
        .expect_err(&format!("Expected parse error for: {sql}"))
}

/// Asserts that `sql` fails with exactly `message`.
pub fn assert_err(sql: &str, message: &str) -> ParseError {
    let err = parse_err(sql);
    assert_eq!(err.message, message, "Unexpected error for: {sql}");
    err
}

pub fn parse_kind(sql: &str, expected: QueryType) -> Query {
    let query = parse_ok(sql);
    assert_eq!(query.query_type, expected, "Wrong statement type for: {sql}");
    query
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// Verifies that `to_string()` produces text that parses back to an equal
/// query, and that rendering is a fixed point.
pub fn round_trip(sql: &str) {
    let query1 = parse_ok(sql);
    let rendered1 = query1.to_string();
    let query2 = parse_ok(&rendered1);
    let rendered2 = query2.to_string();
    assert_eq!(
        query1, query2,
        "Round-trip changed the query.\n  Input:    {sql}\n  Rendered: {rendered1}"
    );
    assert_eq!(
        rendered1, rendered2,
        "Round-trip failed.\n  Input:    {sql}\n  First:    {rendered1}\n  Second:   {rendered2}"
    );
}
