//! Rendering of syntax trees back to SQL.
//!
//! The output is canonical lowercase SQL that parses back to an equal tree.
//! Absent clauses render as nothing, so a rendered statement never carries
//! empty `where` or `order by` keywords.
//!
//! Queries and expressions are rendered from an explicit work stack rather
//! than by recursion, so arbitrarily deep trees cannot exhaust the call
//! stack.

use std::borrow::Cow;
use std::fmt::{self, Display, Formatter, Write};

use super::{
    DdlAction, DdlSimple, Delete, Insert, InsertRows, Node, Rename, Select, SelectExpr,
    SelectStatement, Set, SqlNode, Statement, TableExpr, Union, Update,
};
use crate::lexer::TokenKind;

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select(select) => select.fmt(f),
            Self::Union(union) => union.fmt(f),
            Self::Insert(insert) => insert.fmt(f),
            Self::Update(update) => update.fmt(f),
            Self::Delete(delete) => delete.fmt(f),
            Self::Set(set) => set.fmt(f),
            Self::Ddl(ddl) => ddl.fmt(f),
            Self::Rename(rename) => rename.fmt(f),
        }
    }
}

impl Display for SelectStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        render(f, Piece::Query(self))
    }
}

impl Display for Select {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        render(f, Piece::Select(self))
    }
}

impl Display for Union {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        render(f, Piece::Union(self))
    }
}

impl Display for Insert {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("insert ")?;
        write_comments(f, &self.comments)?;
        write!(f, "into {}", self.table)?;
        if let Some(columns) = &self.columns {
            f.write_str(" (")?;
            for (i, column) in columns.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                column.fmt(f)?;
            }
            f.write_char(')')?;
        }
        match &self.rows {
            InsertRows::Values(values) => write!(f, " {values}")?,
            InsertRows::Select(select) => write!(f, " {select}")?,
        }
        self.on_dup.fmt(f)
    }
}

impl Display for Update {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("update ")?;
        write_comments(f, &self.comments)?;
        write!(
            f,
            "{} set {}{}{}{}",
            self.table, self.list, self.where_clause, self.order_by, self.limit
        )
    }
}

impl Display for Delete {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("delete ")?;
        write_comments(f, &self.comments)?;
        write!(
            f,
            "from {}{}{}{}",
            self.table, self.where_clause, self.order_by, self.limit
        )
    }
}

impl Display for Set {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("set ")?;
        write_comments(f, &self.comments)?;
        self.updates.fmt(f)
    }
}

impl Display for DdlSimple {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} table {}", self.action.as_str(), self.table)?;
        // `alter table t` alone does not parse; any operation word reads back
        // as the same statement.
        if self.action == DdlAction::Alter {
            f.write_str(" alter")?;
        }
        Ok(())
    }
}

impl Display for Rename {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "rename table {} to {}", self.old_name, self.new_name)
    }
}

impl Display for SelectExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        render(f, Piece::SelectExpr(self))
    }
}

impl Display for TableExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        render(f, Piece::TableExpr(self))
    }
}

impl Display for SqlNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        render(f, Piece::Child(self))
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        render(f, Piece::Node(self))
    }
}

/// A unit of pending output.
enum Piece<'a> {
    Str(&'a str),
    Text(Cow<'a, str>),
    Ident(&'a [u8]),
    Quoted(&'a [u8]),
    Comments(&'a [Vec<u8>]),
    Node(&'a Node),
    Child(&'a SqlNode),
    Query(&'a SelectStatement),
    Select(&'a Select),
    Union(&'a Union),
    SelectExpr(&'a SelectExpr),
    TableExpr(&'a TableExpr),
}

/// Writes `root`, expanding composite pieces onto a stack until only text
/// is left.
fn render(f: &mut Formatter<'_>, root: Piece<'_>) -> fmt::Result {
    let mut stack = vec![root];
    let mut parts = Vec::new();
    while let Some(piece) = stack.pop() {
        match piece {
            Piece::Str(text) => f.write_str(text)?,
            Piece::Text(text) => f.write_str(&text)?,
            Piece::Ident(name) => write_ident(f, name)?,
            Piece::Quoted(value) => write_string(f, value)?,
            Piece::Comments(comments) => write_comments(f, comments)?,
            Piece::Node(node) => expand_node(node, &mut parts),
            Piece::Child(SqlNode::Node(node)) => parts.push(Piece::Node(node)),
            Piece::Child(SqlNode::Subquery(select)) => parts.push(Piece::Query(select)),
            Piece::Child(SqlNode::SelectExprs(exprs)) => {
                push_list(&mut parts, exprs, ", ", Piece::SelectExpr);
            }
            Piece::Query(SelectStatement::Select(select)) => parts.push(Piece::Select(select)),
            Piece::Query(SelectStatement::Union(union)) => parts.push(Piece::Union(union)),
            Piece::Select(select) => expand_select(select, &mut parts),
            Piece::Union(union) => parts.extend([
                Piece::Query(&union.left),
                Piece::Str(" "),
                Piece::Str(union.kind.as_str()),
                Piece::Str(" "),
                Piece::Query(&union.right),
            ]),
            Piece::SelectExpr(expr) => expand_select_expr(expr, &mut parts),
            Piece::TableExpr(table) => expand_table_expr(table, &mut parts),
        }
        stack.extend(parts.drain(..).rev());
    }
    Ok(())
}

fn expand_select<'a>(select: &'a Select, parts: &mut Vec<Piece<'a>>) {
    parts.push(Piece::Str("select "));
    parts.push(Piece::Comments(&select.comments));
    if select.distinct {
        parts.push(Piece::Str("distinct "));
    }
    push_list(parts, &select.select_exprs, ", ", Piece::SelectExpr);
    parts.push(Piece::Str(" from "));
    push_list(parts, &select.from, ", ", Piece::TableExpr);
    parts.extend(
        [
            &select.where_clause,
            &select.group_by,
            &select.having,
            &select.order_by,
            &select.limit,
            &select.lock,
        ]
        .map(Piece::Node),
    );
}

fn expand_select_expr<'a>(expr: &'a SelectExpr, parts: &mut Vec<Piece<'a>>) {
    match expr {
        SelectExpr::Star { table: None } => parts.push(Piece::Str("*")),
        SelectExpr::Star { table: Some(table) } => {
            parts.extend([Piece::Ident(table), Piece::Str(".*")]);
        }
        SelectExpr::NonStar { expr, alias } => {
            parts.push(Piece::Node(expr));
            if let Some(alias) = alias {
                parts.extend([Piece::Str(" as "), Piece::Ident(alias)]);
            }
        }
    }
}

fn expand_table_expr<'a>(table: &'a TableExpr, parts: &mut Vec<Piece<'a>>) {
    match table {
        TableExpr::Aliased { expr, alias, hints } => {
            parts.push(Piece::Node(expr));
            if let Some(alias) = alias {
                parts.extend([Piece::Str(" as "), Piece::Ident(alias)]);
            }
            if let Some(hints) = hints {
                parts.push(Piece::Node(hints));
            }
        }
        TableExpr::Paren(inner) => {
            parts.extend([Piece::Str("("), Piece::TableExpr(inner), Piece::Str(")")]);
        }
        TableExpr::Join {
            left,
            kind,
            right,
            on,
        } => {
            parts.extend([
                Piece::TableExpr(left),
                Piece::Str(" "),
                Piece::Str(kind.as_str()),
                Piece::Str(" "),
                Piece::TableExpr(right),
            ]);
            if let Some(on) = on {
                parts.extend([Piece::Str(" on "), Piece::Node(on)]);
            }
        }
    }
}

#[allow(clippy::too_many_lines)]
fn expand_node<'a>(node: &'a Node, parts: &mut Vec<Piece<'a>>) {
    let kind = node.kind;
    let arg = |index: usize| node.child(index).map_or(Piece::Str(""), Piece::Child);

    if let Some(op) = binary_operator(kind) {
        parts.extend([
            arg(0),
            Piece::Str(" "),
            Piece::Str(op),
            Piece::Str(" "),
            arg(1),
        ]);
        return;
    }

    match kind {
        TokenKind::ID => parts.push(Piece::Ident(&node.value)),
        TokenKind::STRING => parts.push(Piece::Quoted(&node.value)),
        TokenKind::NUMBER | TokenKind::VALUE_ARG => parts.push(Piece::Text(node.value_str())),
        TokenKind::NULL => parts.push(Piece::Str("null")),
        TokenKind::DOT => parts.extend([arg(0), Piece::Str("."), arg(1)]),
        TokenKind::BETWEEN | TokenKind::NOT_BETWEEN => {
            let keyword = if kind == TokenKind::BETWEEN {
                " between "
            } else {
                " not between "
            };
            parts.extend([
                arg(0),
                Piece::Str(keyword),
                arg(1),
                Piece::Str(" and "),
                arg(2),
            ]);
        }
        TokenKind::IS_NULL => parts.extend([arg(0), Piece::Str(" is null")]),
        TokenKind::IS_NOT_NULL => parts.extend([arg(0), Piece::Str(" is not null")]),
        TokenKind::NOT => parts.extend([Piece::Str("not "), arg(0)]),
        TokenKind::EXISTS => parts.extend([Piece::Str("exists ("), arg(0), Piece::Str(")")]),
        TokenKind::UMINUS | TokenKind::UPLUS | TokenKind::TILDE => {
            parts.push(Piece::Str(match kind {
                TokenKind::UMINUS => "-",
                TokenKind::UPLUS => "+",
                _ => "~",
            }));
            // `- -x` must not collapse into a `--` comment.
            if node.child(0).is_some_and(starts_with_sign) {
                parts.push(Piece::Str(" "));
            }
            parts.push(arg(0));
        }
        TokenKind::LEFT_PAREN => parts.extend([Piece::Str("("), arg(0), Piece::Str(")")]),
        TokenKind::NODE_LIST | TokenKind::INDEX_LIST => {
            push_list(parts, &node.children, ", ", Piece::Child);
        }
        TokenKind::FUNCTION => {
            if is_keyword_function(&node.value) {
                parts.push(Piece::Text(Cow::Owned(
                    node.value_str().to_ascii_lowercase(),
                )));
            } else {
                parts.push(Piece::Ident(&node.value));
            }
            parts.push(Piece::Str("("));
            push_list(parts, &node.children, " ", Piece::Child);
            parts.push(Piece::Str(")"));
        }
        TokenKind::DISTINCT => parts.push(Piece::Str("distinct")),
        TokenKind::CASE | TokenKind::CASE_WHEN => {
            parts.push(Piece::Str("case "));
            push_list(parts, &node.children, " ", Piece::Child);
            parts.push(Piece::Str(" end"));
        }
        TokenKind::WHEN_LIST => push_list(parts, &node.children, " ", Piece::Child),
        TokenKind::WHEN => parts.extend([
            Piece::Str("when "),
            arg(0),
            Piece::Str(" then "),
            arg(1),
        ]),
        TokenKind::ELSE => parts.extend([Piece::Str("else "), arg(0)]),
        TokenKind::WHERE => push_clause(parts, " where ", node),
        TokenKind::HAVING => push_clause(parts, " having ", node),
        TokenKind::GROUP => push_clause(parts, " group by ", node),
        TokenKind::ORDER => push_clause(parts, " order by ", node),
        TokenKind::DUPLICATE => push_clause(parts, " on duplicate key update ", node),
        TokenKind::ASC => parts.extend([arg(0), Piece::Str(" asc")]),
        TokenKind::DESC => parts.extend([arg(0), Piece::Str(" desc")]),
        TokenKind::LIMIT => match node.len() {
            0 => {}
            1 => parts.extend([Piece::Str(" limit "), arg(0)]),
            _ => parts.extend([Piece::Str(" limit "), arg(0), Piece::Str(", "), arg(1)]),
        },
        TokenKind::NO_LOCK => {}
        TokenKind::FOR_UPDATE => parts.push(Piece::Str(" for update")),
        TokenKind::LOCK_IN_SHARE_MODE => parts.push(Piece::Str(" lock in share mode")),
        TokenKind::VALUES => parts.extend([Piece::Str("values "), arg(0)]),
        TokenKind::USE => parts.extend([Piece::Str(" use index ("), arg(0), Piece::Str(")")]),
        TokenKind::FORCE => {
            parts.extend([Piece::Str(" force index ("), arg(0), Piece::Str(")")]);
        }
        _ => {
            parts.push(Piece::Text(node.value_str()));
            if !node.is_empty() {
                parts.push(Piece::Str("("));
                push_list(parts, &node.children, ", ", Piece::Child);
                parts.push(Piece::Str(")"));
            }
        }
    }
}

/// Whether `child` renders with a leading `-` or `+`.
fn starts_with_sign(mut child: &SqlNode) -> bool {
    loop {
        let node = match child {
            SqlNode::Node(node) => node,
            SqlNode::SelectExprs(exprs) => match exprs.first() {
                Some(SelectExpr::NonStar { expr, .. }) => expr,
                _ => return false,
            },
            SqlNode::Subquery(_) => return false,
        };
        match node.kind {
            TokenKind::NUMBER => {
                return matches!(node.value.first(), Some(b'-' | b'+'));
            }
            TokenKind::UMINUS | TokenKind::UPLUS => return true,
            TokenKind::DOT
            | TokenKind::BETWEEN
            | TokenKind::NOT_BETWEEN
            | TokenKind::IS_NULL
            | TokenKind::IS_NOT_NULL
            | TokenKind::ASC
            | TokenKind::DESC
            | TokenKind::NODE_LIST
            | TokenKind::WHEN_LIST => {}
            kind if binary_operator(kind).is_some() => {}
            _ => return false,
        }
        match node.child(0) {
            Some(first) => child = first,
            None => return false,
        }
    }
}

fn push_clause<'a>(parts: &mut Vec<Piece<'a>>, keyword: &'static str, node: &'a Node) {
    if node.is_empty() {
        return;
    }
    parts.push(Piece::Str(keyword));
    push_list(parts, &node.children, ", ", Piece::Child);
}

fn push_list<'a, T>(
    parts: &mut Vec<Piece<'a>>,
    items: &'a [T],
    separator: &'static str,
    piece: fn(&'a T) -> Piece<'a>,
) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            parts.push(Piece::Str(separator));
        }
        parts.push(piece(item));
    }
}

fn binary_operator(kind: TokenKind) -> Option<&'static str> {
    let op = match kind {
        TokenKind::AND => "and",
        TokenKind::OR => "or",
        TokenKind::LIKE => "like",
        TokenKind::NOT_LIKE => "not like",
        TokenKind::IN => "in",
        TokenKind::NOT_IN => "not in",
        TokenKind::EQ => "=",
        TokenKind::LT => "<",
        TokenKind::GT => ">",
        TokenKind::LE => "<=",
        TokenKind::GE => ">=",
        TokenKind::NE => "!=",
        TokenKind::NULL_SAFE_EQUAL => "<=>",
        TokenKind::AMPERSAND => "&",
        TokenKind::PIPE => "|",
        TokenKind::CARET => "^",
        TokenKind::PLUS => "+",
        TokenKind::MINUS_SIGN => "-",
        TokenKind::STAR => "*",
        TokenKind::SLASH => "/",
        TokenKind::PERCENT => "%",
        _ => return None,
    };
    Some(op)
}

fn is_keyword_function(name: &[u8]) -> bool {
    name.eq_ignore_ascii_case(b"if") || name.eq_ignore_ascii_case(b"values")
}

fn write_comments(f: &mut Formatter<'_>, comments: &[Vec<u8>]) -> fmt::Result {
    for comment in comments {
        f.write_str(&String::from_utf8_lossy(comment))?;
        if !comment.ends_with(b"\n") {
            f.write_char(' ')?;
        }
    }
    Ok(())
}

/// Writes an identifier, back-quoting it when it would not scan as one.
fn write_ident(f: &mut Formatter<'_>, name: &[u8]) -> fmt::Result {
    let plain = name
        .first()
        .is_some_and(|b| b.is_ascii_alphabetic() || *b == b'_' || *b == b'@')
        && name
            .iter()
            .all(|b| b.is_ascii_alphanumeric() || *b == b'_' || *b == b'@')
        && std::str::from_utf8(name)
            .ok()
            .and_then(TokenKind::keyword)
            .is_none();
    let text = String::from_utf8_lossy(name);
    if plain {
        return f.write_str(&text);
    }
    f.write_char('`')?;
    f.write_str(&text.replace('`', "``"))?;
    f.write_char('`')
}

fn write_string(f: &mut Formatter<'_>, value: &[u8]) -> fmt::Result {
    f.write_char('\'')?;
    for c in String::from_utf8_lossy(value).chars() {
        match c {
            '\'' => f.write_str("\\'")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\0' => f.write_str("\\0")?,
            '\u{8}' => f.write_str("\\b")?,
            '\u{1a}' => f.write_str("\\Z")?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('\'')
}
