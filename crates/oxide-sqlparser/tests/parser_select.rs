//! Tests for SELECT statements: column lists, FROM sources and joins,
//! trailing clauses, set operations and comments.

mod common;
use common::*;

use oxide_sqlparser::TokenKind;
use oxide_sqlparser::ast::{JoinKind, SelectExpr, SetOp, Statement, TableExpr};

#[test]
fn select_where_equals() {
    let s = parse_select("SELECT a, b FROM t WHERE a = 1");
    assert!(!s.distinct);
    assert!(s.comments.is_empty());
    assert_eq!(s.select_exprs.len(), 2);
    assert!(matches!(
        &s.select_exprs[0],
        SelectExpr::NonStar { expr, alias: None } if expr.kind == TokenKind::ID && expr.value == b"a"
    ));

    let cond = s.where_clause.node_at(0).expect("where condition");
    assert_eq!(cond.kind, TokenKind::EQ);
    assert_eq!(cond.node_at(0).map(|n| n.value.as_slice()), Some(&b"a"[..]));
    assert_eq!(cond.node_at(1).map(|n| n.kind), Some(TokenKind::NUMBER));

    assert!(s.group_by.is(TokenKind::GROUP) && s.group_by.is_empty());
    assert!(s.having.is(TokenKind::HAVING) && s.having.is_empty());
    assert!(s.order_by.is(TokenKind::ORDER) && s.order_by.is_empty());
    assert!(s.limit.is(TokenKind::LIMIT) && s.limit.is_empty());
    assert!(s.lock.is(TokenKind::NO_LOCK));

    assert_eq!(render("SELECT a, b FROM t WHERE a = 1"), "select a, b from t where a = 1");
}

#[test]
fn select_absent_where_is_empty_node() {
    let s = parse_select("select a from t");
    assert!(s.where_clause.is(TokenKind::WHERE));
    assert_eq!(s.where_clause.value, b"where");
    assert!(s.where_clause.is_empty());
    assert_eq!(render("select a from t"), "select a from t");
}

#[test]
fn select_star_and_qualified_star() {
    let s = parse_select("select *, t.* from t");
    assert_eq!(s.select_exprs[0], SelectExpr::Star { table: None });
    assert_eq!(
        s.select_exprs[1],
        SelectExpr::Star {
            table: Some(b"t".to_vec())
        }
    );
    round_trip("select *, t.* from t");
}

#[test]
fn select_distinct_with_aliases() {
    let s = parse_select("select distinct a x, b as Y from t");
    assert!(s.distinct);
    assert!(matches!(&s.select_exprs[0], SelectExpr::NonStar { alias: Some(a), .. } if a == b"x"));
    assert!(matches!(&s.select_exprs[1], SelectExpr::NonStar { alias: Some(a), .. } if a == b"y"));
    assert_eq!(
        render("select distinct a x, b as Y from t"),
        "select distinct a as x, b as y from t"
    );
}

#[test]
fn select_column_names_are_lowercased() {
    let s = parse_select("SELECT Name FROM Users");
    assert!(matches!(
        &s.select_exprs[0],
        SelectExpr::NonStar { expr, .. } if expr.value == b"name"
    ));
    // Table names keep their spelling.
    assert!(matches!(
        &s.from[0],
        TableExpr::Aliased { expr, .. } if expr.value == b"Users"
    ));
    assert_eq!(render("SELECT Name FROM Users"), "select name from Users");
}

// ===================================================================
// FROM sources
// ===================================================================

#[test]
fn from_qualified_table_with_alias() {
    let s = parse_select("select a from db.t1 as u, t2");
    assert_eq!(s.from.len(), 2);
    let TableExpr::Aliased { expr, alias, hints } = &s.from[0] else {
        panic!("expected aliased table, got {:?}", s.from[0]);
    };
    assert!(expr.is(TokenKind::DOT));
    assert_eq!(alias.as_deref(), Some(&b"u"[..]));
    assert!(hints.is_none());
    assert_eq!(s.from[1].alias(), None);
    round_trip("select a from db.t1 as u, t2");
}

#[test]
fn from_subquery_with_index_hints() {
    let sql = "select a from (select b from u) as s use index (i1, i2)";
    let s = parse_select(sql);
    let TableExpr::Aliased { expr, alias, hints } = &s.from[0] else {
        panic!("expected aliased table");
    };
    assert!(expr.is(TokenKind::LEFT_PAREN));
    assert!(expr.child(0).and_then(|c| c.as_subquery()).is_some());
    assert_eq!(alias.as_deref(), Some(&b"s"[..]));
    let hints = hints.as_ref().expect("index hints");
    assert!(hints.is(TokenKind::USE));
    assert_eq!(hints.node_at(0).map(|n| n.len()), Some(2));
    assert_eq!(render(sql), sql);
}

#[test]
fn from_force_index() {
    round_trip("select a from t force index (i)");
    assert_eq!(
        render("select a from t force index (i)"),
        "select a from t force index (i)"
    );
}

#[test]
fn from_parenthesized_table() {
    let s = parse_select("select a from (t)");
    assert!(matches!(&s.from[0], TableExpr::Paren(inner) if inner.alias().is_none()));
    round_trip("select a from (t)");
}

// ===================================================================
// Joins
// ===================================================================

#[test]
fn join_left_outer_with_on() {
    let s = parse_select("select * from a left outer join b on a.id = b.id join c");
    let TableExpr::Join {
        left,
        kind,
        right,
        on,
    } = &s.from[0]
    else {
        panic!("expected join");
    };
    assert_eq!(*kind, JoinKind::Inner);
    assert!(on.is_none());
    assert!(matches!(right.as_ref(), TableExpr::Aliased { expr, .. } if expr.value == b"c"));
    assert!(matches!(
        left.as_ref(),
        TableExpr::Join { kind: JoinKind::Left, on: Some(_), .. }
    ));
    assert_eq!(
        render("select * from a left outer join b on a.id = b.id join c"),
        "select * from a left join b on a.id = b.id join c"
    );
}

#[test]
fn join_kinds_are_normalized() {
    let cases = [
        ("select a from t join u", JoinKind::Inner),
        ("select a from t inner join u", JoinKind::Inner),
        ("select a from t straight_join u", JoinKind::StraightJoin),
        ("select a from t left join u", JoinKind::Left),
        ("select a from t right outer join u", JoinKind::Right),
        ("select a from t cross join u", JoinKind::Cross),
        ("select a from t natural join u", JoinKind::Natural),
    ];
    for (sql, expected) in cases {
        let s = parse_select(sql);
        assert!(
            matches!(&s.from[0], TableExpr::Join { kind, .. } if *kind == expected),
            "{sql}"
        );
        round_trip(sql);
    }
}

#[test]
fn join_chain_is_left_nested() {
    let s = parse_select("select a from t natural join u cross join v right join w on w.a = v.a");
    let TableExpr::Join { left, kind, on, .. } = &s.from[0] else {
        panic!("expected join");
    };
    assert_eq!(*kind, JoinKind::Right);
    assert!(on.is_some());
    assert!(matches!(left.as_ref(), TableExpr::Join { kind: JoinKind::Cross, .. }));
}

// ===================================================================
// Trailing clauses
// ===================================================================

#[test]
fn group_having_order() {
    let sql = "select a from t group by a, b having count(*) > 1 order by a desc, b";
    let s = parse_select(sql);
    assert_eq!(s.group_by.node_at(0).map(|n| n.len()), Some(2));
    assert_eq!(s.having.node_at(0).map(|n| n.kind), Some(TokenKind::GT));

    let order = s.order_by.node_at(0).expect("order list");
    assert_eq!(order.node_at(0).map(|n| n.kind), Some(TokenKind::DESC));
    // Without a direction the item defaults to ascending.
    assert_eq!(order.node_at(1).map(|n| n.kind), Some(TokenKind::ASC));

    assert_eq!(
        render(sql),
        "select a from t group by a, b having count(*) > 1 order by a desc, b asc"
    );
    round_trip(sql);
}

#[test]
fn limit_with_offset() {
    let s = parse_select("select a from t limit 1, 2");
    assert_eq!(s.limit.len(), 2);
    assert_eq!(render("select a from t limit 1, 2"), "select a from t limit 1, 2");
    assert_eq!(parse_select("select a from t limit 5").limit.len(), 1);
}

#[test]
fn lock_for_update() {
    let s = parse_select("select a from t for update");
    assert!(s.lock.is(TokenKind::FOR_UPDATE));
    assert_eq!(render("select a from t for update"), "select a from t for update");
}

#[test]
fn lock_in_share_mode() {
    let s = parse_select("select a from t lock in share mode");
    assert!(s.lock.is(TokenKind::LOCK_IN_SHARE_MODE));
    assert_eq!(s.lock.value, b" lock in share mode");
    round_trip("select a from t lock in share mode");
}

#[test]
fn lock_words_are_case_insensitive() {
    let s = parse_select("select a from t LOCK IN SHARE MODE");
    assert!(s.lock.is(TokenKind::LOCK_IN_SHARE_MODE));
}

// ===================================================================
// Set operations
// ===================================================================

#[test]
fn union_chain_is_left_nested() {
    let stmt = parse("select a from t union select b from u union all select c from v");
    let union = stmt.as_union().expect("union");
    assert_eq!(union.kind, SetOp::UnionAll);
    assert!(union.right.as_select().is_some());
    let Statement::Union(_) = Statement::from(union.left.clone()) else {
        panic!("left side should be a union");
    };
    assert_eq!(
        stmt.to_string(),
        "select a from t union select b from u union all select c from v"
    );
}

#[test]
fn set_operators() {
    let cases = [
        ("select a from t minus select a from u", SetOp::Minus),
        ("select a from t except select a from u", SetOp::Except),
        ("select a from t intersect select a from u", SetOp::Intersect),
        ("select a from t union select a from u", SetOp::Union),
    ];
    for (sql, expected) in cases {
        let stmt = parse(sql);
        assert_eq!(stmt.as_union().map(|u| u.kind), Some(expected), "{sql}");
        assert!(stmt.is_query());
        round_trip(sql);
    }
}

// ===================================================================
// Comments
// ===================================================================

#[test]
fn comments_after_keyword_are_kept() {
    let s = parse_select("select /* hint */ a from t");
    assert_eq!(s.comments, vec![b"/* hint */".to_vec()]);
    assert_eq!(render("select /* hint */ a from t"), "select /* hint */ a from t");
}

#[test]
fn comments_elsewhere_are_skipped() {
    let s = parse_select("select a /* ignored */ from t -- trailing\n");
    assert!(s.comments.is_empty());
    assert_eq!(
        render("select a /* ignored */ from t -- trailing\n"),
        "select a from t"
    );
}

#[test]
fn multiple_leading_comments() {
    let s = parse_select("select /* a */ /* b */ 1 from t");
    assert_eq!(s.comments.len(), 2);
    round_trip("select /* a */ /* b */ 1 from t");
}
