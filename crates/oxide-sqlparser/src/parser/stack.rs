//! Values carried on the parse stack.

use crate::ast::{
    Columns, Comments, InsertRows, JoinKind, Node, SelectExpr, SelectExprs, SelectStatement,
    SetOp, Statement, TableExpr, TableExprs,
};
use crate::lexer::{Span, Token};

use super::error::{ParseError, Result};

/// The value of one grammar symbol.
///
/// Each production stores exactly one variant; the action consuming the
/// symbol knows from the grammar which one it is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SemanticValue {
    /// No value: the start frame, empty optional symbols and pure side
    /// effects.
    #[default]
    Empty,
    Node(Node),
    Statement(Statement),
    Select(SelectStatement),
    Comments(Comments),
    Bytes(Vec<u8>),
    Distinct(bool),
    SelectExprs(SelectExprs),
    SelectExpr(SelectExpr),
    Columns(Columns),
    TableExprs(TableExprs),
    TableExpr(TableExpr),
    Rows(InsertRows),
    Join(JoinKind),
    SetOp(SetOp),
}

impl SemanticValue {
    /// Name of the stored variant.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Node(_) => "node",
            Self::Statement(_) => "statement",
            Self::Select(_) => "select statement",
            Self::Comments(_) => "comments",
            Self::Bytes(_) => "bytes",
            Self::Distinct(_) => "distinct flag",
            Self::SelectExprs(_) => "select expressions",
            Self::SelectExpr(_) => "select expression",
            Self::Columns(_) => "columns",
            Self::TableExprs(_) => "table expressions",
            Self::TableExpr(_) => "table expression",
            Self::Rows(_) => "insert rows",
            Self::Join(_) => "join kind",
            Self::SetOp(_) => "set operation",
        }
    }
}

impl From<Token> for SemanticValue {
    fn from(token: Token) -> Self {
        Self::Node(Node::from(token))
    }
}

/// One frame of the parse stack.
#[derive(Debug)]
pub struct Frame<V> {
    /// The automaton state.
    pub state: usize,
    /// The input covered by the symbol.
    pub span: Span,
    /// The value of the symbol that led to `state`.
    pub value: V,
}

/// The right-hand side of a production being reduced.
///
/// Values are taken by position, left to right from zero, each at most once.
#[derive(Debug)]
pub struct Rhs {
    production: usize,
    slots: Vec<Option<SemanticValue>>,
    spans: Vec<Span>,
}

macro_rules! take_as {
    ($(#[$doc:meta] $name:ident => $variant:ident($ty:ty);)*) => {
        $(
            #[$doc]
            pub fn $name(&mut self, index: usize) -> Result<$ty> {
                match self.take(index)? {
                    SemanticValue::$variant(value) => Ok(value),
                    other => Err(self.mismatch(stringify!($name), &other)),
                }
            }
        )*
    };
}

impl Rhs {
    /// Wraps the popped values of `production`.
    #[must_use]
    pub fn new(production: usize, values: Vec<SemanticValue>) -> Self {
        Self {
            production,
            slots: values.into_iter().map(Some).collect(),
            spans: Vec::new(),
        }
    }

    /// Attaches the input spans of the values.
    #[must_use]
    pub fn with_spans(mut self, spans: &[Span]) -> Self {
        self.spans = spans.to_vec();
        self
    }

    /// The input covered by the value at `index`; empty when unknown.
    #[must_use]
    pub fn span(&self, index: usize) -> Span {
        self.spans.get(index).copied().unwrap_or_default()
    }

    /// The production being reduced.
    #[must_use]
    pub const fn production(&self) -> usize {
        self.production
    }

    /// Takes the value at `index`, whatever its type.
    pub fn take(&mut self, index: usize) -> Result<SemanticValue> {
        self.slots
            .get_mut(index)
            .and_then(Option::take)
            .ok_or(ParseError::ValueMismatch {
                production: self.production,
                expected: "a value",
                found: "nothing",
            })
    }

    /// The default result of a reduction: the first value, or
    /// [`SemanticValue::Empty`] for an empty right-hand side.
    #[must_use]
    pub fn into_first(self) -> SemanticValue {
        self.slots.into_iter().next().flatten().unwrap_or_default()
    }

    fn mismatch(&self, expected: &'static str, found: &SemanticValue) -> ParseError {
        ParseError::ValueMismatch {
            production: self.production,
            expected,
            found: found.type_name(),
        }
    }

    take_as! {
        /// Takes a node.
        node => Node(Node);
        /// Takes a statement.
        statement => Statement(Statement);
        /// Takes a select statement.
        select => Select(SelectStatement);
        /// Takes a comment list.
        comments => Comments(Comments);
        /// Takes a distinct flag.
        distinct => Distinct(bool);
        /// Takes a select-expression list.
        select_exprs => SelectExprs(SelectExprs);
        /// Takes a select expression.
        select_expr => SelectExpr(SelectExpr);
        /// Takes a column list.
        columns => Columns(Columns);
        /// Takes a table-expression list.
        table_exprs => TableExprs(TableExprs);
        /// Takes a table expression.
        table_expr => TableExpr(TableExpr);
        /// Takes an insert row source.
        rows => Rows(InsertRows);
        /// Takes a join kind.
        join => Join(JoinKind);
        /// Takes a set operation.
        set_op => SetOp(SetOp);
    }

    /// Takes an optional node; an empty optional symbol yields `None`.
    pub fn opt_node(&mut self, index: usize) -> Result<Option<Node>> {
        match self.take(index)? {
            SemanticValue::Empty => Ok(None),
            SemanticValue::Node(node) => Ok(Some(node)),
            other => Err(self.mismatch("optional node", &other)),
        }
    }

    /// Takes an optional byte string.
    pub fn opt_bytes(&mut self, index: usize) -> Result<Option<Vec<u8>>> {
        match self.take(index)? {
            SemanticValue::Empty => Ok(None),
            SemanticValue::Bytes(bytes) => Ok(Some(bytes)),
            other => Err(self.mismatch("optional bytes", &other)),
        }
    }

    /// Takes an optional column list.
    pub fn opt_columns(&mut self, index: usize) -> Result<Option<Columns>> {
        match self.take(index)? {
            SemanticValue::Empty => Ok(None),
            SemanticValue::Columns(columns) => Ok(Some(columns)),
            other => Err(self.mismatch("optional columns", &other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;

    #[test]
    fn test_take_by_position() {
        let mut rhs = Rhs::new(
            81,
            vec![
                SemanticValue::Node(Node::new(TokenKind::ID, "a")),
                SemanticValue::Node(Node::new(TokenKind::EQ, "=")),
            ],
        );
        assert_eq!(rhs.node(1).unwrap().kind, TokenKind::EQ);
        assert_eq!(rhs.node(0).unwrap().kind, TokenKind::ID);
    }

    #[test]
    fn test_take_twice_fails() {
        let mut rhs = Rhs::new(3, vec![SemanticValue::Distinct(true)]);
        assert!(rhs.distinct(0).unwrap());
        assert!(matches!(
            rhs.distinct(0),
            Err(ParseError::ValueMismatch { production: 3, .. })
        ));
    }

    #[test]
    fn test_wrong_variant_is_reported() {
        let mut rhs = Rhs::new(42, vec![SemanticValue::Distinct(false)]);
        let err = rhs.node(0).unwrap_err();
        assert_eq!(
            err,
            ParseError::ValueMismatch {
                production: 42,
                expected: "node",
                found: "distinct flag",
            }
        );
    }

    #[test]
    fn test_optional_values() {
        let mut rhs = Rhs::new(
            50,
            vec![
                SemanticValue::Empty,
                SemanticValue::Bytes(b"alias".to_vec()),
            ],
        );
        assert_eq!(rhs.opt_node(0).unwrap(), None);
        assert_eq!(rhs.opt_bytes(1).unwrap(), Some(b"alias".to_vec()));
    }

    #[test]
    fn test_spans_by_position() {
        let rhs = Rhs::new(158, vec![SemanticValue::Empty; 2])
            .with_spans(&[Span::new(16, 20), Span::new(21, 23)]);
        assert_eq!(rhs.span(1), Span::new(21, 23));
        assert_eq!(rhs.span(5), Span::default());
    }

    #[test]
    fn test_into_first() {
        let rhs = Rhs::new(0, Vec::new());
        assert_eq!(rhs.into_first(), SemanticValue::Empty);
        let rhs = Rhs::new(0, vec![SemanticValue::Distinct(true), SemanticValue::Empty]);
        assert_eq!(rhs.into_first(), SemanticValue::Distinct(true));
    }
}
