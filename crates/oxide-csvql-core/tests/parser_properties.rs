//! Properties that hold across every statement family.

mod common;
use common::*;

use oxide_csvql_core::{Query, parse};

const VALID: &[&str] = &[
    "SELECT a FROM 'b'",
    "SELECT a, c AS total, * FROM 'b' WHERE a != '1' AND c >= 2",
    "SELECT version()",
    "INSERT INTO 'a' (b, c) VALUES ('1', '2'), ('3', '4')",
    "UPDATE 'a' SET b = 'hello', c = 'bye' WHERE a = '1' AND b = d",
    "DELETE FROM 'a' WHERE b <= -3",
    r"SELECT a FROM 'b' WHERE a = 'back\\slash \'quoted\''",
];

#[test]
fn parsing_is_deterministic() {
    for sql in VALID {
        assert_eq!(parse(sql), parse(sql), "{sql}");
    }
    let sql = "SELECT a FROM 'b' WHERE a ~ '1'";
    assert_eq!(parse(sql), parse(sql));
}

#[test]
fn keywords_are_case_insensitive() {
    let pairs = [
        (
            "SELECT a FROM 'b' WHERE a = '1' AND c = '2'",
            "select a from 'b' where a = '1' and c = '2'",
        ),
        (
            "INSERT INTO 'a' (b) VALUES ('1')",
            "InSeRt InTo 'a' (b) vAlUeS ('1')",
        ),
        (
            "UPDATE 'a' SET b = '1' WHERE c = '2'",
            "update 'a' set b = '1' where c = '2'",
        ),
        ("DELETE FROM 'a' WHERE b = '1'", "Delete From 'a' Where b = '1'"),
        ("SELECT a AS x FROM 'b'", "SELECT a as x FROM 'b'"),
    ];
    for (upper, mixed) in pairs {
        assert_eq!(parse_ok(upper), parse_ok(mixed), "{mixed}");
    }
}

#[test]
fn rendering_round_trips() {
    for sql in VALID {
        round_trip(sql);
    }
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(
        parse_ok("SELECT a,b FROM 't' WHERE a='1'"),
        parse_ok("  SELECT\ta ,\n b   FROM 't'   WHERE a = '1'  ")
    );
}

#[test]
fn successful_queries_satisfy_shape_rules() {
    for sql in VALID {
        let q = parse_ok(sql);
        assert!(!q.table_name.is_empty() || !q.fields.is_empty(), "{sql}");
        for condition in &q.conditions {
            assert!(!condition.operand1.is_empty(), "{sql}");
        }
        for row in &q.inserts {
            assert_eq!(row.len(), q.fields.len(), "{sql}");
        }
        if !q.aliases.is_empty() {
            assert_eq!(q.aliases.len(), q.fields.len(), "{sql}");
        }
    }
}

#[test]
fn json_shape() {
    let q = parse_ok("UPDATE 'a' SET c = '2', b = '1' WHERE id >= 10");
    let value = serde_json::to_value(&q).unwrap();
    assert_eq!(value["type"], "update");
    assert_eq!(value["table_name"], "a");
    assert_eq!(value["conditions"][0]["operand1"], "id");
    assert_eq!(value["conditions"][0]["operator"], "gte");
    assert_eq!(value["conditions"][0]["operand2_kind"], "numeric_literal");

    let json = serde_json::to_string(&q).unwrap();
    assert!(json.find("\"c\"").unwrap() < json.find("\"b\"").unwrap());

    let back: Query = serde_json::from_str(&json).unwrap();
    assert_eq!(back, q);
}
