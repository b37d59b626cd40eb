//! Tests for INSERT, UPDATE, DELETE and SET statements.

mod common;
use common::*;

use oxide_sqlparser::TokenKind;
use oxide_sqlparser::ast::{InsertRows, Statement};

// ===================================================================
// INSERT
// ===================================================================

#[test]
fn insert_values_with_columns() {
    let sql = "insert into t (a, b) values (1, 'x'), (2, 'y') on duplicate key update a = 1";
    let i = parse_insert(sql);
    assert!(i.table.is(TokenKind::ID));
    let columns = i.columns.as_ref().expect("column list");
    assert_eq!(columns.len(), 2);
    let InsertRows::Values(values) = &i.rows else {
        panic!("expected VALUES rows");
    };
    assert!(values.is(TokenKind::VALUES));
    let tuples = values.node_at(0).expect("tuple list");
    assert_eq!(tuples.len(), 2);
    assert!(tuples.node_at(0).is_some_and(|t| t.is(TokenKind::LEFT_PAREN)));

    assert!(i.on_dup.is(TokenKind::DUPLICATE));
    assert_eq!(i.on_dup.node_at(0).map(|n| n.len()), Some(1));
    assert_eq!(render(sql), sql);
}

#[test]
fn insert_without_columns_or_duplicate_clause() {
    let i = parse_insert("insert /* c */ into db.t values (1)");
    assert_eq!(i.comments, vec![b"/* c */".to_vec()]);
    assert!(i.table.is(TokenKind::DOT));
    assert!(i.columns.is_none());
    assert!(i.on_dup.is(TokenKind::DUPLICATE) && i.on_dup.is_empty());
    assert_eq!(
        render("insert /* c */ into db.t values (1)"),
        "insert /* c */ into db.t values (1)"
    );
}

#[test]
fn insert_column_names_are_lowercased() {
    let i = parse_insert("insert into t (A) values (:a)");
    let columns = i.columns.expect("column list");
    assert_eq!(columns[0].value, b"a");
}

#[test]
fn insert_from_select() {
    let i = parse_insert("insert into t select a from u");
    assert!(matches!(&i.rows, InsertRows::Select(s) if s.as_select().is_some()));
    round_trip("insert into t select a from u");
}

#[test]
fn insert_duplicate_update_with_values_function() {
    round_trip("insert into t (a) values (:a) on duplicate key update b = values(b)");
}

// ===================================================================
// UPDATE
// ===================================================================

#[test]
fn update_with_all_clauses() {
    let sql = "update t set a = 1 where b = 2 order by c limit 3";
    let u = parse_update(sql);
    assert!(u.table.is(TokenKind::ID));
    assert!(u.list.is(TokenKind::NODE_LIST));
    assert_eq!(u.list.node_at(0).map(|n| n.kind), Some(TokenKind::EQ));
    assert!(!u.where_clause.is_empty());
    assert_eq!(u.limit.len(), 1);
    assert_eq!(render(sql), "update t set a = 1 where b = 2 order by c asc limit 3");
}

#[test]
fn update_multiple_assignments() {
    let u = parse_update("update /* u */ t set a = a + 1, b = 'x'");
    assert_eq!(u.comments.len(), 1);
    assert_eq!(u.list.len(), 2);
    assert!(u.where_clause.is_empty());
    assert!(u.order_by.is_empty());
    round_trip("update /* u */ t set a = a + 1, b = 'x'");
}

#[test]
fn update_qualified_names() {
    let u = parse_update("update db.t set t.a = 1");
    assert!(u.table.is(TokenKind::DOT));
    let assignment = u.list.node_at(0).expect("assignment");
    assert_eq!(assignment.node_at(0).map(|n| n.kind), Some(TokenKind::DOT));
    assert_eq!(render("update db.t set t.a = 1"), "update db.t set t.a = 1");
}

// ===================================================================
// DELETE
// ===================================================================

#[test]
fn delete_with_where() {
    let sql = "delete from t where a in (1, 2)";
    let d = parse_delete(sql);
    assert!(d.table.is(TokenKind::ID));
    assert_eq!(d.where_clause.node_at(0).map(|n| n.kind), Some(TokenKind::IN));
    assert_eq!(render(sql), sql);
}

#[test]
fn delete_with_order_and_limit() {
    let d = parse_delete("delete from t order by a limit 10");
    assert!(d.where_clause.is_empty());
    assert_eq!(d.order_by.len(), 1);
    assert_eq!(d.limit.len(), 1);
    assert_eq!(
        render("delete from t order by a limit 10"),
        "delete from t order by a asc limit 10"
    );
}

// ===================================================================
// SET
// ===================================================================

#[test]
fn set_assignments() {
    let stmt = parse("set a = 1, b = 'x'");
    let Statement::Set(set) = &stmt else {
        panic!("expected SET, got {stmt:?}");
    };
    assert!(set.comments.is_empty());
    assert_eq!(set.updates.len(), 2);
    assert_eq!(stmt.to_string(), "set a = 1, b = 'x'");
    assert_eq!(stmt.kind(), "set");
}

#[test]
fn set_with_comment() {
    round_trip("set /* session */ autocommit = 1");
}
