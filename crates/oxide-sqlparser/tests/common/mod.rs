#![allow(dead_code)]

use oxide_sqlparser::ast::{Delete, Insert, Node, Select, SelectExpr, Statement, Update};
use oxide_sqlparser::{ParseError, Parser};

pub fn parse(sql: &str) -> Statement {
    Parser::default()
        .parse_str(sql)
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    Parser::default()
        .parse_str(sql)
        .expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_select(sql: &str) -> Select {
    match parse(sql) {
        Statement::Select(s) => *s,
        other => panic!("Expected SELECT, got {other:?}"),
    }
}

pub fn parse_insert(sql: &str) -> Insert {
    match parse(sql) {
        Statement::Insert(i) => *i,
        other => panic!("Expected INSERT, got {other:?}"),
    }
}

pub fn parse_update(sql: &str) -> Update {
    match parse(sql) {
        Statement::Update(u) => *u,
        other => panic!("Expected UPDATE, got {other:?}"),
    }
}

pub fn parse_delete(sql: &str) -> Delete {
    match parse(sql) {
        Statement::Delete(d) => *d,
        other => panic!("Expected DELETE, got {other:?}"),
    }
}

/// The expression of the first select column.
pub fn first_expr(sql: &str) -> Node {
    let select = parse_select(sql);
    match select.select_exprs.into_iter().next() {
        Some(SelectExpr::NonStar { expr, .. }) => expr,
        other => panic!("Expected an expression column, got {other:?}"),
    }
}

/// Renders `sql` after one parse.
pub fn render(sql: &str) -> String {
    parse(sql).to_string()
}

/// Verifies that `to_string()` produces a fixed point:
/// parse(sql).to_string() can be re-parsed and yields the same
/// tree and string again.
pub fn round_trip(sql: &str) {
    let ast1 = parse(sql);
    let rendered1 = ast1.to_string();
    let ast2 = parse(&rendered1);
    let rendered2 = ast2.to_string();
    assert_eq!(
        rendered1, rendered2,
        "Round-trip failed.\n  Input:    {sql}\n  First:    {rendered1}\n  Second:   {rendered2}"
    );
    let ast3 = parse(&rendered2);
    assert_eq!(ast2, ast3, "Tree changed after re-parsing: {rendered2}");
}
