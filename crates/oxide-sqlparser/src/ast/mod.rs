//! Abstract Syntax Tree (AST) types.
//!
//! Statements are a closed sum type; the expressions inside them use the
//! generic [`Node`] tree, tagged by [`crate::lexer::TokenKind`].

mod display;
mod node;
mod statement;

use serde::Serializer;

pub use node::{Node, SqlNode};
pub use statement::{
    Columns, Comments, DdlAction, DdlSimple, Delete, Insert, InsertRows, JoinKind, Rename,
    Select, SelectExpr, SelectExprs, SelectStatement, Set, SetOp, Statement, TableExpr,
    TableExprs, Union, Update,
};

#[allow(clippy::ptr_arg)]
fn bytes_as_str<S: Serializer>(bytes: &Vec<u8>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(bytes))
}

#[allow(clippy::ref_option)]
fn opt_bytes_as_str<S: Serializer>(
    bytes: &Option<Vec<u8>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match bytes {
        Some(bytes) => serializer.serialize_some(&String::from_utf8_lossy(bytes)),
        None => serializer.serialize_none(),
    }
}

#[allow(clippy::ptr_arg)]
fn bytes_list_as_str<S: Serializer>(
    list: &Vec<Vec<u8>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(list.iter().map(|bytes| String::from_utf8_lossy(bytes)))
}
