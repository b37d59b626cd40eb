//! The generic expression tree.
//!
//! Expressions, conditions and clause bodies share one node type whose
//! meaning comes from its [`TokenKind`] tag. Children are ordered: binary
//! operators hold `[left, right]`, `BETWEEN` holds
//! `[subject, low, high]`, and so on.

use std::borrow::Cow;
use std::ops::Index;

use serde::Serialize;

use super::{bytes_as_str, Select, SelectExpr, SelectExprs, SelectStatement, TableExpr, Union};
use crate::lexer::{Token, TokenKind};

/// A tagged tree node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    /// The node type.
    pub kind: TokenKind,
    /// Keyword spelling, identifier text, literal payload or operator.
    #[serde(serialize_with = "bytes_as_str")]
    pub value: Vec<u8>,
    /// Ordered children.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SqlNode>,
}

/// A child of a [`Node`].
///
/// Subqueries and select-expression lists appear inside expressions (`IN
/// (select ...)`, `count(distinct a)`), so a child is either another node or
/// one of those.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SqlNode {
    /// A nested node.
    Node(Node),
    /// A nested query.
    Subquery(SelectStatement),
    /// Function arguments.
    SelectExprs(SelectExprs),
}

impl Node {
    /// Creates a leaf node.
    #[must_use]
    pub fn new(kind: TokenKind, value: impl Into<Vec<u8>>) -> Self {
        Self {
            kind,
            value: value.into(),
            children: Vec::new(),
        }
    }

    /// Appends a child and returns the node.
    #[must_use]
    pub fn push(mut self, child: impl Into<SqlNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends two children in order and returns the node.
    #[must_use]
    pub fn push_two(mut self, left: impl Into<SqlNode>, right: impl Into<SqlNode>) -> Self {
        self.children.push(left.into());
        self.children.push(right.into());
        self
    }

    /// Appends a child in place.
    pub fn add_child(&mut self, child: impl Into<SqlNode>) {
        self.children.push(child.into());
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true for a leaf.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The child at `index`.
    #[must_use]
    pub fn child(&self, index: usize) -> Option<&SqlNode> {
        self.children.get(index)
    }

    /// The child at `index` if it is a plain node.
    #[must_use]
    pub fn node_at(&self, index: usize) -> Option<&Node> {
        self.child(index).and_then(SqlNode::as_node)
    }

    /// Lowercases the value in place.
    pub fn lower_case(&mut self) {
        self.value.make_ascii_lowercase();
    }

    /// Returns the node with its value lowercased.
    #[must_use]
    pub fn lowered(mut self) -> Self {
        self.lower_case();
        self
    }

    /// The value as text, replacing invalid UTF-8.
    #[must_use]
    pub fn value_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.value)
    }

    /// Returns true if the node has type `kind`.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Consumes the node, returning its value.
    #[must_use]
    pub fn into_value(mut self) -> Vec<u8> {
        std::mem::take(&mut self.value)
    }
}

/// Tears the tree down from a work list, so any nesting depth drops in
/// constant stack space.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(child) = pending.pop() {
            match child {
                SqlNode::Node(mut node) => pending.append(&mut node.children),
                SqlNode::Subquery(select) => detach_query(select, &mut pending),
                SqlNode::SelectExprs(exprs) => detach_select_exprs(exprs, &mut pending),
            }
        }
    }
}

fn detach_query(select: SelectStatement, pending: &mut Vec<SqlNode>) {
    match select {
        SelectStatement::Select(select) => {
            let Select {
                select_exprs,
                from,
                where_clause,
                group_by,
                having,
                order_by,
                limit,
                lock,
                ..
            } = *select;
            detach_select_exprs(select_exprs, pending);
            detach_tables(from, pending);
            pending.extend(
                [where_clause, group_by, having, order_by, limit, lock].map(SqlNode::Node),
            );
        }
        SelectStatement::Union(union) => {
            let Union { left, right, .. } = *union;
            pending.push(SqlNode::Subquery(left));
            pending.push(SqlNode::Subquery(right));
        }
    }
}

fn detach_select_exprs(exprs: SelectExprs, pending: &mut Vec<SqlNode>) {
    pending.extend(exprs.into_iter().filter_map(|expr| match expr {
        SelectExpr::NonStar { expr, .. } => Some(SqlNode::Node(expr)),
        SelectExpr::Star { .. } => None,
    }));
}

fn detach_tables(mut tables: Vec<TableExpr>, pending: &mut Vec<SqlNode>) {
    while let Some(table) = tables.pop() {
        match table {
            TableExpr::Aliased { expr, hints, .. } => {
                pending.push(SqlNode::Node(expr));
                pending.extend(hints.map(SqlNode::Node));
            }
            TableExpr::Paren(inner) => tables.push(*inner),
            TableExpr::Join { left, right, on, .. } => {
                tables.push(*left);
                tables.push(*right);
                pending.extend(on.map(SqlNode::Node));
            }
        }
    }
}

impl From<Token> for Node {
    fn from(token: Token) -> Self {
        Self::new(token.kind, token.value)
    }
}

impl Index<usize> for Node {
    type Output = SqlNode;

    fn index(&self, index: usize) -> &SqlNode {
        &self.children[index]
    }
}

impl SqlNode {
    /// Returns the nested node, if this is one.
    #[must_use]
    pub const fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Returns the nested query, if this is one.
    #[must_use]
    pub const fn as_subquery(&self) -> Option<&SelectStatement> {
        match self {
            Self::Subquery(select) => Some(select),
            _ => None,
        }
    }

    /// Returns the argument list, if this is one.
    #[must_use]
    pub const fn as_select_exprs(&self) -> Option<&SelectExprs> {
        match self {
            Self::SelectExprs(exprs) => Some(exprs),
            _ => None,
        }
    }
}

impl From<Node> for SqlNode {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<SelectStatement> for SqlNode {
    fn from(select: SelectStatement) -> Self {
        Self::Subquery(select)
    }
}

impl From<SelectExprs> for SqlNode {
    fn from(exprs: SelectExprs) -> Self {
        Self::SelectExprs(exprs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> Node {
        Node::new(TokenKind::ID, name)
    }

    #[test]
    fn test_push_two_keeps_order() {
        let node = Node::new(TokenKind::char(b'+'), "+").push_two(id("a"), id("b"));
        assert_eq!(node.len(), 2);
        assert_eq!(node.node_at(0).map(Node::value_str).as_deref(), Some("a"));
        assert_eq!(node.node_at(1).map(Node::value_str).as_deref(), Some("b"));
    }

    #[test]
    fn test_index_and_child() {
        let node = Node::new(TokenKind::NOT, "not").push(id("x"));
        assert!(matches!(&node[0], SqlNode::Node(n) if n.value == b"x"));
        assert!(node.child(1).is_none());
        assert!(!node.is_empty());
    }

    #[test]
    fn test_lower_case() {
        let mut node = id("MixedCase");
        node.lower_case();
        assert_eq!(node.value, b"mixedcase");
        assert_eq!(id("ABC").lowered().value_str(), "abc");
    }

    #[test]
    fn test_add_child_in_place() {
        let mut list = Node::new(TokenKind::NODE_LIST, "node_list");
        list.add_child(id("a"));
        list.add_child(id("b"));
        assert_eq!(list.len(), 2);
        assert!(list.is(TokenKind::NODE_LIST));
    }

    #[test]
    fn test_from_token() {
        let token = Token::new(TokenKind::NUMBER, "42", crate::lexer::Span::new(0, 2));
        let node = Node::from(token);
        assert_eq!(node.kind, TokenKind::NUMBER);
        assert_eq!(node.value_str(), "42");
    }

    #[test]
    fn test_into_value() {
        assert_eq!(id("abc").into_value(), b"abc");
    }

    #[test]
    fn test_deep_trees_drop() {
        let mut node = id("x");
        for _ in 0..200_000 {
            node = Node::new(TokenKind::LEFT_PAREN, "(").push(node);
        }
        drop(node);
    }
}
