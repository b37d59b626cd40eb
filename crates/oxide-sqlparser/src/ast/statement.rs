//! Top-level statement types.

use serde::Serialize;

use super::{bytes_list_as_str, opt_bytes_as_str, Node};

/// Leading `/* ... */` comments of a statement, verbatim.
pub type Comments = Vec<Vec<u8>>;

/// The expressions of a select list or function argument list.
pub type SelectExprs = Vec<SelectExpr>;

/// The sources of a `FROM` clause.
pub type TableExprs = Vec<TableExpr>;

/// An insert column list.
pub type Columns = Vec<Node>;

/// A parsed SQL statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Statement {
    /// `SELECT ...`
    Select(Box<Select>),
    /// `<select> UNION <select>` and the other set operations.
    Union(Box<Union>),
    /// `INSERT INTO ...`
    Insert(Box<Insert>),
    /// `UPDATE ...`
    Update(Box<Update>),
    /// `DELETE FROM ...`
    Delete(Box<Delete>),
    /// `SET ...`
    Set(Set),
    /// `CREATE`, `ALTER` or `DROP` of a table, index or view.
    Ddl(DdlSimple),
    /// `RENAME TABLE` or `ALTER TABLE ... RENAME`.
    Rename(Rename),
}

/// A statement that yields rows: a plain select or a set operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectStatement {
    /// A plain select.
    Select(Box<Select>),
    /// A set operation over two queries.
    Union(Box<Union>),
}

/// A `SELECT` statement.
///
/// Every clause is a node even when absent from the input; an absent clause
/// is a leaf carrying its keyword (`where`, `group`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Select {
    #[serde(serialize_with = "bytes_list_as_str")]
    pub comments: Comments,
    pub distinct: bool,
    pub select_exprs: SelectExprs,
    pub from: TableExprs,
    pub where_clause: Node,
    pub group_by: Node,
    pub having: Node,
    pub order_by: Node,
    pub limit: Node,
    /// `NO_LOCK`, `FOR_UPDATE` or `LOCK_IN_SHARE_MODE`.
    pub lock: Node,
}

/// A set operation: `left <op> right`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Union {
    pub kind: SetOp,
    pub left: SelectStatement,
    pub right: SelectStatement,
}

/// The operator of a [`Union`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SetOp {
    Union,
    UnionAll,
    Minus,
    Except,
    Intersect,
}

impl SetOp {
    /// Canonical lowercase spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Union => "union",
            Self::UnionAll => "union all",
            Self::Minus => "minus",
            Self::Except => "except",
            Self::Intersect => "intersect",
        }
    }
}

/// An `INSERT` statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insert {
    #[serde(serialize_with = "bytes_list_as_str")]
    pub comments: Comments,
    /// `ID` or a qualified `.` node.
    pub table: Node,
    pub columns: Option<Columns>,
    pub rows: InsertRows,
    /// `DUPLICATE`; its single child is the update list when present.
    pub on_dup: Node,
}

/// Where inserted rows come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertRows {
    /// A `VALUES` node holding a `NODE_LIST` of tuples.
    Values(Node),
    /// A query.
    Select(SelectStatement),
}

/// An `UPDATE` statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Update {
    #[serde(serialize_with = "bytes_list_as_str")]
    pub comments: Comments,
    pub table: Node,
    /// `NODE_LIST` of `=` assignments.
    pub list: Node,
    pub where_clause: Node,
    pub order_by: Node,
    pub limit: Node,
}

/// A `DELETE` statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Delete {
    #[serde(serialize_with = "bytes_list_as_str")]
    pub comments: Comments,
    pub table: Node,
    pub where_clause: Node,
    pub order_by: Node,
    pub limit: Node,
}

/// A `SET` statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Set {
    #[serde(serialize_with = "bytes_list_as_str")]
    pub comments: Comments,
    /// `NODE_LIST` of `=` assignments.
    pub updates: Node,
}

/// A schema statement reduced to its action and target.
///
/// Only the leading part of DDL is parsed; the rest of the input is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DdlSimple {
    pub action: DdlAction,
    /// The affected table, or the view name for view statements.
    pub table: Node,
}

/// The action of a [`DdlSimple`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DdlAction {
    Create,
    Alter,
    Drop,
}

impl DdlAction {
    /// Canonical lowercase spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Alter => "alter",
            Self::Drop => "drop",
        }
    }
}

/// A table rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rename {
    pub old_name: Node,
    pub new_name: Node,
}

/// One entry of a select list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectExpr {
    /// `*` or `table.*`.
    Star {
        #[serde(serialize_with = "opt_bytes_as_str")]
        table: Option<Vec<u8>>,
    },
    /// An expression with an optional (lowercased) alias.
    NonStar {
        expr: Node,
        #[serde(serialize_with = "opt_bytes_as_str")]
        alias: Option<Vec<u8>>,
    },
}

/// One source in a `FROM` clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableExpr {
    /// A table name or subquery with optional alias and index hints.
    Aliased {
        /// `ID`, a qualified `.` node, or a `(` node wrapping a subquery.
        expr: Node,
        #[serde(serialize_with = "opt_bytes_as_str")]
        alias: Option<Vec<u8>>,
        /// `USE` or `FORCE` node holding an `INDEX_LIST`.
        hints: Option<Node>,
    },
    /// A parenthesized table expression.
    Paren(Box<TableExpr>),
    /// `left <join> right [ON cond]`.
    Join {
        left: Box<TableExpr>,
        kind: JoinKind,
        right: Box<TableExpr>,
        on: Option<Node>,
    },
}

/// The kind of a join, independent of input spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinKind {
    /// `JOIN` or `INNER JOIN`.
    Inner,
    StraightJoin,
    /// `LEFT [OUTER] JOIN`.
    Left,
    /// `RIGHT [OUTER] JOIN`.
    Right,
    Cross,
    Natural,
}

impl JoinKind {
    /// Canonical lowercase spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inner => "join",
            Self::StraightJoin => "straight_join",
            Self::Left => "left join",
            Self::Right => "right join",
            Self::Cross => "cross join",
            Self::Natural => "natural join",
        }
    }
}

impl Statement {
    /// Returns the plain select, if this is one.
    #[must_use]
    pub fn as_select(&self) -> Option<&Select> {
        match self {
            Self::Select(select) => Some(select),
            _ => None,
        }
    }

    /// Returns the set operation, if this is one.
    #[must_use]
    pub fn as_union(&self) -> Option<&Union> {
        match self {
            Self::Union(union) => Some(union),
            _ => None,
        }
    }

    /// Returns true for statements that produce rows.
    #[must_use]
    pub const fn is_query(&self) -> bool {
        matches!(self, Self::Select(_) | Self::Union(_))
    }

    /// Short name of the statement kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Select(_) => "select",
            Self::Union(_) => "union",
            Self::Insert(_) => "insert",
            Self::Update(_) => "update",
            Self::Delete(_) => "delete",
            Self::Set(_) => "set",
            Self::Ddl(_) => "ddl",
            Self::Rename(_) => "rename",
        }
    }
}

impl SelectStatement {
    /// Returns the plain select, if this is one.
    #[must_use]
    pub fn as_select(&self) -> Option<&Select> {
        match self {
            Self::Select(select) => Some(select),
            Self::Union(_) => None,
        }
    }
}

impl From<SelectStatement> for Statement {
    fn from(select: SelectStatement) -> Self {
        match select {
            SelectStatement::Select(select) => Self::Select(select),
            SelectStatement::Union(union) => Self::Union(union),
        }
    }
}

impl TableExpr {
    /// The alias of an aliased table expression.
    #[must_use]
    pub fn alias(&self) -> Option<&[u8]> {
        match self {
            Self::Aliased { alias, .. } => alias.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;

    fn leaf(kind: TokenKind, value: &str) -> Node {
        Node::new(kind, value)
    }

    fn select_of(table: &str) -> Box<Select> {
        Box::new(Select {
            comments: Vec::new(),
            distinct: false,
            select_exprs: vec![SelectExpr::Star { table: None }],
            from: vec![TableExpr::Aliased {
                expr: leaf(TokenKind::ID, table),
                alias: None,
                hints: None,
            }],
            where_clause: leaf(TokenKind::WHERE, "where"),
            group_by: leaf(TokenKind::GROUP, "group"),
            having: leaf(TokenKind::HAVING, "having"),
            order_by: leaf(TokenKind::ORDER, "order"),
            limit: leaf(TokenKind::LIMIT, "limit"),
            lock: leaf(TokenKind::NO_LOCK, ""),
        })
    }

    #[test]
    fn test_select_statement_into_statement() {
        let stmt = Statement::from(SelectStatement::Select(select_of("t")));
        assert!(stmt.is_query());
        assert!(stmt.as_select().is_some());
        assert!(stmt.as_union().is_none());
    }

    #[test]
    fn test_spellings() {
        assert_eq!(JoinKind::Left.as_str(), "left join");
        assert_eq!(JoinKind::Inner.as_str(), "join");
        assert_eq!(SetOp::UnionAll.as_str(), "union all");
        assert_eq!(DdlAction::Drop.as_str(), "drop");
    }

    #[test]
    fn test_table_alias() {
        let aliased = TableExpr::Aliased {
            expr: leaf(TokenKind::ID, "users"),
            alias: Some(b"u".to_vec()),
            hints: None,
        };
        assert_eq!(aliased.alias(), Some(&b"u"[..]));
        assert_eq!(TableExpr::Paren(Box::new(aliased)).alias(), None);
    }
}
