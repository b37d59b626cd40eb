//! Grammar actions of the SQL grammar.
//!
//! One arm per production, numbered as in the parse tables. Each arm takes
//! its right-hand-side values by position (`rhs.node(0)` is the first symbol)
//! and returns the value of the left-hand side. Productions without an arm
//! pass their first value through.

use tracing::warn;

use super::automaton::Reduce;
use super::context::ParseContext;
use super::error::{ParseError, Result};
use super::stack::{Rhs, SemanticValue as Value};
use crate::ast::{
    DdlAction, DdlSimple, Delete, Insert, InsertRows, JoinKind, Node, Rename, Select, SelectExpr,
    SelectStatement, Set, SetOp, SqlNode, Statement, TableExpr, Union, Update,
};
use crate::lexer::{Span, Token, TokenKind};

/// Builds the syntax tree of one statement.
#[derive(Debug, Default)]
pub struct SqlActions;

impl Reduce for SqlActions {
    type Value = Value;

    fn empty(&mut self) -> Value {
        Value::Empty
    }

    fn shift(&mut self, token: Token) -> Value {
        Value::from(token)
    }

    fn reduce(
        &mut self,
        production: usize,
        rhs: Vec<Value>,
        spans: &[Span],
        ctx: &mut ParseContext,
    ) -> Result<Value> {
        reduce(Rhs::new(production, rhs).with_spans(spans), ctx)
    }
}

fn leaf(kind: TokenKind, value: &str) -> Node {
    Node::new(kind, value)
}

fn binary(rhs: &mut Rhs) -> Result<Value> {
    let op = rhs.node(1)?;
    Ok(Value::Node(op.push_two(rhs.node(0)?, rhs.node(2)?)))
}

fn ddl(action: DdlAction, table: Node) -> Value {
    Value::Statement(Statement::Ddl(DdlSimple { action, table }))
}

fn select(select: Select) -> Value {
    Value::Select(SelectStatement::Select(Box::new(select)))
}

fn function(mut name: Node) -> Node {
    name.kind = TokenKind::FUNCTION;
    name
}

/// Moves a trailing `ELSE` out of the `WHEN` list onto the case node itself.
fn case(mut node: Node, mut whens: Node) -> Node {
    let otherwise = match whens.children.last() {
        Some(SqlNode::Node(last)) if last.is(TokenKind::ELSE) => whens.children.pop(),
        _ => None,
    };
    node.add_child(whens);
    if let Some(otherwise) = otherwise {
        node.add_child(otherwise);
    }
    node
}

/// `(expr)`: a lone literal-like value loses its parentheses.
fn parenthesized(paren: Node, mut list: Node) -> Node {
    if list.len() != 1 {
        return paren.push(list);
    }
    match list.children.pop() {
        Some(SqlNode::Node(inner)) => match inner.kind {
            TokenKind::STRING
            | TokenKind::ID
            | TokenKind::VALUE_ARG
            | TokenKind::LEFT_PAREN
            | TokenKind::DOT => inner,
            _ => paren.push(inner),
        },
        Some(other) => paren.push(other),
        None => paren.push(list),
    }
}

/// Applies a unary operator, folding signs into numeric literals.
fn unary(op: Node, mut operand: Node) -> Node {
    if !operand.is(TokenKind::NUMBER) {
        return op.push(operand);
    }
    match op.kind {
        TokenKind::UMINUS => {
            if operand.value.first() == Some(&b'-') {
                operand.value.remove(0);
            } else {
                operand.value.insert(0, b'-');
            }
            operand
        }
        TokenKind::UPLUS => operand,
        _ => op.push(operand),
    }
}

/// Checks the free-form words of `LOCK IN SHARE MODE`, reporting a mismatch
/// at the word itself.
fn expect_word(node: &Node, span: Span, word: &str, ctx: &mut ParseContext) -> Result<()> {
    if node.value == word.as_bytes() {
        return Ok(());
    }
    let diagnostic = ctx.report_at(
        format!("expecting {word}"),
        span.start,
        node.value_str(),
        node.kind,
    );
    warn!(%diagnostic, "rejected lock clause");
    Err(ParseError::Semantic(diagnostic))
}

#[allow(clippy::too_many_lines)]
fn reduce(mut rhs: Rhs, ctx: &mut ParseContext) -> Result<Value> {
    let value = match rhs.production() {
        // any_command: command
        1 => {
            ctx.set_parse_tree(rhs.statement(0)?);
            Value::Empty
        }
        // command: select_statement
        2 => Value::Statement(rhs.select(0)?.into()),

        // SELECT comment_opt distinct_opt select_expression_list FROM
        // table_expression_list where_opt group_by_opt having_opt order_by_opt
        // limit_opt lock_opt
        11 => select(Select {
            comments: rhs.comments(1)?,
            distinct: rhs.distinct(2)?,
            select_exprs: rhs.select_exprs(3)?,
            from: rhs.table_exprs(5)?,
            where_clause: rhs.node(6)?,
            group_by: rhs.node(7)?,
            having: rhs.node(8)?,
            order_by: rhs.node(9)?,
            limit: rhs.node(10)?,
            lock: rhs.node(11)?,
        }),
        // select_statement union_op select_statement
        12 => Value::Select(SelectStatement::Union(Box::new(Union {
            kind: rhs.set_op(1)?,
            left: rhs.select(0)?,
            right: rhs.select(2)?,
        }))),
        // INSERT comment_opt INTO dml_table_expression column_list_opt row_list on_dup_opt
        13 => Value::Statement(Statement::Insert(Box::new(Insert {
            comments: rhs.comments(1)?,
            table: rhs.node(3)?,
            columns: rhs.opt_columns(4)?,
            rows: rhs.rows(5)?,
            on_dup: rhs.node(6)?,
        }))),
        // UPDATE comment_opt dml_table_expression SET update_list where_opt order_by_opt limit_opt
        14 => Value::Statement(Statement::Update(Box::new(Update {
            comments: rhs.comments(1)?,
            table: rhs.node(2)?,
            list: rhs.node(4)?,
            where_clause: rhs.node(5)?,
            order_by: rhs.node(6)?,
            limit: rhs.node(7)?,
        }))),
        // DELETE comment_opt FROM dml_table_expression where_opt order_by_opt limit_opt
        15 => Value::Statement(Statement::Delete(Box::new(Delete {
            comments: rhs.comments(1)?,
            table: rhs.node(3)?,
            where_clause: rhs.node(4)?,
            order_by: rhs.node(5)?,
            limit: rhs.node(6)?,
        }))),
        // SET comment_opt update_list
        16 => Value::Statement(Statement::Set(Set {
            comments: rhs.comments(1)?,
            updates: rhs.node(2)?,
        })),

        // CREATE TABLE not_exists_opt ID force_eof
        17 => ddl(DdlAction::Create, rhs.node(3)?),
        // CREATE constraint_opt INDEX sql_id using_opt ON ID force_eof
        18 => ddl(DdlAction::Alter, rhs.node(6)?),
        // CREATE VIEW sql_id force_eof
        19 => ddl(DdlAction::Create, rhs.node(2)?),
        // ALTER ignore_opt TABLE ID non_rename_operation force_eof
        20 => ddl(DdlAction::Alter, rhs.node(3)?),
        // ALTER ignore_opt TABLE ID RENAME to_opt ID
        21 => Value::Statement(Statement::Rename(Rename {
            old_name: rhs.node(3)?,
            new_name: rhs.node(6)?,
        })),
        // ALTER VIEW sql_id force_eof
        22 => ddl(DdlAction::Alter, rhs.node(2)?),
        // RENAME TABLE ID TO ID
        23 => Value::Statement(Statement::Rename(Rename {
            old_name: rhs.node(2)?,
            new_name: rhs.node(4)?,
        })),
        // DROP TABLE exists_opt ID
        24 => ddl(DdlAction::Drop, rhs.node(3)?),
        // DROP INDEX sql_id ON ID
        25 => ddl(DdlAction::Alter, rhs.node(4)?),
        // DROP VIEW exists_opt sql_id force_eof
        26 => ddl(DdlAction::Drop, rhs.node(3)?),

        // Comments are only tokens between the leading keyword and the
        // rest of the statement.
        27 => {
            ctx.set_allow_comments(true);
            Value::Empty
        }
        28 => {
            ctx.set_allow_comments(false);
            rhs.take(1)?
        }
        29 => Value::Comments(Vec::new()),
        30 => {
            let mut comments = rhs.comments(0)?;
            comments.push(rhs.node(1)?.into_value());
            Value::Comments(comments)
        }

        31 => Value::SetOp(SetOp::Union),
        32 => Value::SetOp(SetOp::UnionAll),
        33 => Value::SetOp(SetOp::Minus),
        34 => Value::SetOp(SetOp::Except),
        35 => Value::SetOp(SetOp::Intersect),

        36 => Value::Distinct(false),
        37 => Value::Distinct(true),

        // select_expression_list
        38 => Value::SelectExprs(vec![rhs.select_expr(0)?]),
        39 => {
            let mut exprs = rhs.select_exprs(0)?;
            exprs.push(rhs.select_expr(2)?);
            Value::SelectExprs(exprs)
        }
        // select_expression: '*' | expression as_lower_opt | ID '.' '*'
        40 => Value::SelectExpr(SelectExpr::Star { table: None }),
        41 => Value::SelectExpr(SelectExpr::NonStar {
            expr: rhs.node(0)?,
            alias: rhs.opt_bytes(1)?,
        }),
        42 => Value::SelectExpr(SelectExpr::Star {
            table: Some(rhs.node(0)?.into_value()),
        }),

        // as_lower_opt, as_opt
        45 | 54 => Value::Empty,
        46 | 55 => Value::Bytes(rhs.node(0)?.into_value()),
        47 | 56 => Value::Bytes(rhs.node(1)?.into_value()),

        // table_expression_list
        48 => Value::TableExprs(vec![rhs.table_expr(0)?]),
        49 => {
            let mut exprs = rhs.table_exprs(0)?;
            exprs.push(rhs.table_expr(2)?);
            Value::TableExprs(exprs)
        }
        // simple_table_expression as_opt index_hint_list
        50 => Value::TableExpr(TableExpr::Aliased {
            expr: rhs.node(0)?,
            alias: rhs.opt_bytes(1)?,
            hints: rhs.opt_node(2)?,
        }),
        51 => Value::TableExpr(TableExpr::Paren(Box::new(rhs.table_expr(1)?))),
        // table_expression join_type table_expression [ON boolean_expression]
        52 | 53 => {
            let on = if rhs.production() == 53 {
                Some(rhs.node(4)?)
            } else {
                None
            };
            Value::TableExpr(TableExpr::Join {
                left: Box::new(rhs.table_expr(0)?),
                kind: rhs.join(1)?,
                right: Box::new(rhs.table_expr(2)?),
                on,
            })
        }

        // join_type
        57 | 63 => Value::Join(JoinKind::Inner),
        58 => Value::Join(JoinKind::StraightJoin),
        59 | 60 => Value::Join(JoinKind::Left),
        61 | 62 => Value::Join(JoinKind::Right),
        64 => Value::Join(JoinKind::Cross),
        65 => Value::Join(JoinKind::Natural),

        // ID '.' ID
        67 | 70 => binary(&mut rhs)?,
        // '(' select_statement ')'
        68 | 103 | 108 => Value::Node(rhs.node(0)?.push(rhs.select(1)?)),
        // index_hint_list
        71 => Value::Empty,
        72 | 73 => Value::Node(rhs.node(0)?.push(rhs.node(3)?)),

        74 => Value::Node(leaf(TokenKind::WHERE, "where")),
        75 | 144 | 154 => Value::Node(rhs.node(0)?.push(rhs.node(1)?)),

        // boolean_expression AND/OR boolean_expression
        77 | 78 => binary(&mut rhs)?,
        // NOT boolean_expression
        79 => Value::Node(rhs.node(0)?.push(rhs.node(1)?)),
        // '(' boolean_expression ')'
        80 => Value::Node(rhs.node(0)?.push(rhs.node(1)?)),

        // value_expression compare value_expression, IN tuple, LIKE
        81 | 82 | 84 => binary(&mut rhs)?,
        83 => Value::Node(
            leaf(TokenKind::NOT_IN, "not in").push_two(rhs.node(0)?, rhs.node(3)?),
        ),
        85 => Value::Node(
            leaf(TokenKind::NOT_LIKE, "not like").push_two(rhs.node(0)?, rhs.node(3)?),
        ),
        // value_expression BETWEEN value_expression AND value_expression
        86 => Value::Node(
            rhs.node(1)?
                .push(rhs.node(0)?)
                .push(rhs.node(2)?)
                .push(rhs.node(4)?),
        ),
        87 => Value::Node(
            leaf(TokenKind::NOT_BETWEEN, "not between")
                .push(rhs.node(0)?)
                .push(rhs.node(3)?)
                .push(rhs.node(5)?),
        ),
        88 => Value::Node(leaf(TokenKind::IS_NULL, "is null").push(rhs.node(0)?)),
        89 => Value::Node(leaf(TokenKind::IS_NOT_NULL, "is not null").push(rhs.node(0)?)),
        // EXISTS '(' select_statement ')'
        90 => Value::Node(rhs.node(0)?.push(rhs.select(2)?)),

        // row_list: VALUES tuple_list | select_statement
        98 => Value::Rows(InsertRows::Values(rhs.node(0)?.push(rhs.node(1)?))),
        99 => Value::Rows(InsertRows::Select(rhs.select(0)?)),

        // Comma-separated lists collected under a NODE_LIST.
        100 | 104 | 147 | 167 => Value::Node(leaf(TokenKind::NODE_LIST, "node_list").push(rhs.node(0)?)),
        101 | 105 | 148 | 164 | 168 => Value::Node(rhs.node(0)?.push(rhs.node(2)?)),

        // tuple: '(' value_expression_list ')'
        102 => Value::Node(rhs.node(0)?.push(rhs.node(1)?)),
        // value_expression: '(' value_expression_list ')'
        109 => Value::Node(parenthesized(rhs.node(0)?, rhs.node(1)?)),
        // Arithmetic and bitwise operators.
        110..=117 => binary(&mut rhs)?,
        // unary_operator value_expression
        118 => Value::Node(unary(rhs.node(0)?, rhs.node(1)?)),

        // sql_id '(' ')'
        119 => Value::Node(function(rhs.node(0)?).push(leaf(TokenKind::NODE_LIST, "node_list"))),
        // sql_id '(' select_expression_list ')', keyword_as_func '(' ... ')'
        120 | 122 => Value::Node(function(rhs.node(0)?).push(rhs.select_exprs(2)?)),
        // sql_id '(' DISTINCT select_expression_list ')'
        121 => Value::Node(
            function(rhs.node(0)?)
                .push(rhs.node(2)?)
                .push(rhs.select_exprs(3)?),
        ),

        126 => Value::Node(leaf(TokenKind::UPLUS, "+")),
        127 => Value::Node(leaf(TokenKind::UMINUS, "-")),

        // CASE when_expression_list END
        129 => Value::Node(case(leaf(TokenKind::CASE_WHEN, "case"), rhs.node(1)?)),
        // CASE value_expression when_expression_list END
        130 => {
            let operand = rhs.node(1)?;
            Value::Node(case(rhs.node(0)?.push(operand), rhs.node(2)?))
        }
        131 => Value::Node(leaf(TokenKind::WHEN_LIST, "when_list").push(rhs.node(0)?)),
        132 => Value::Node(rhs.node(0)?.push(rhs.node(1)?)),
        // WHEN boolean_expression THEN value_expression
        133 => Value::Node(rhs.node(0)?.push_two(rhs.node(1)?, rhs.node(3)?)),
        // ELSE value_expression
        134 => Value::Node(rhs.node(0)?.push(rhs.node(1)?)),

        // ID '.' sql_id
        136 => binary(&mut rhs)?,

        141 => Value::Node(leaf(TokenKind::GROUP, "group")),
        // GROUP BY value_expression_list, ORDER BY order_list
        142 | 146 => Value::Node(rhs.node(0)?.push(rhs.node(2)?)),
        143 => Value::Node(leaf(TokenKind::HAVING, "having")),
        145 => Value::Node(leaf(TokenKind::ORDER, "order")),
        // value_expression asc_desc_opt
        149 => {
            let expr = rhs.node(0)?;
            Value::Node(rhs.node(1)?.push(expr))
        }
        150 => Value::Node(leaf(TokenKind::ASC, "asc")),

        153 => Value::Node(leaf(TokenKind::LIMIT, "limit")),
        // LIMIT value_expression ',' value_expression
        155 => Value::Node(rhs.node(0)?.push_two(rhs.node(1)?, rhs.node(3)?)),

        156 => Value::Node(leaf(TokenKind::NO_LOCK, "")),
        157 => Value::Node(leaf(TokenKind::FOR_UPDATE, " for update")),
        // LOCK IN sql_id sql_id
        158 => {
            expect_word(&rhs.node(2)?, rhs.span(2), "share", ctx)?;
            expect_word(&rhs.node(3)?, rhs.span(3), "mode", ctx)?;
            Value::Node(leaf(TokenKind::LOCK_IN_SHARE_MODE, " lock in share mode"))
        }

        // column_list_opt
        159 => Value::Empty,
        160 => rhs.take(1)?,
        161 => Value::Columns(vec![rhs.node(0)?]),
        162 => {
            let mut columns = rhs.columns(0)?;
            columns.push(rhs.node(2)?);
            Value::Columns(columns)
        }

        163 => Value::Node(leaf(TokenKind::INDEX_LIST, "").push(rhs.node(0)?)),

        165 => Value::Node(leaf(TokenKind::DUPLICATE, "duplicate")),
        // ON DUPLICATE KEY UPDATE update_list
        166 => Value::Node(rhs.node(1)?.push(rhs.node(4)?)),

        // column_name '=' value_expression
        169 => binary(&mut rhs)?,

        // Optional keywords whose presence changes nothing.
        170 | 172 | 174 | 181 | 183 | 185 => Value::Empty,

        // sql_id: ID
        187 => Value::Node(rhs.node(0)?.lowered()),
        // force_eof
        188 => {
            ctx.force_eof();
            Value::Empty
        }

        _ => rhs.into_first(),
    };
    Ok(value)
}
