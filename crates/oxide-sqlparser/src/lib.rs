//! # oxide-sqlparser
//!
//! A table-driven LALR(1) parser for a MySQL-flavoured SQL dialect.
//!
//! This crate provides:
//! - A tokenizer producing the token kinds of the grammar
//! - A generic shift-reduce automaton with yacc-style error recovery
//! - Grammar actions building a typed statement tree with generic
//!   expression nodes
//! - Canonical SQL rendering of the tree through `Display`
//!
//! ## Parsing
//!
//! ```rust
//! use oxide_sqlparser::ast::Statement;
//!
//! let statement = oxide_sqlparser::parse("SELECT a, b FROM t WHERE a = 1").unwrap();
//! let Statement::Select(select) = &statement else {
//!     panic!("expected a select");
//! };
//! assert_eq!(select.select_exprs.len(), 2);
//! assert_eq!(statement.to_string(), "select a, b from t where a = 1");
//! ```
//!
//! ## Errors
//!
//! Syntax errors carry the byte offset and the text of the offending token:
//!
//! ```rust
//! let err = oxide_sqlparser::parse("select from t").unwrap_err();
//! assert_eq!(err.to_string(), "syntax error at position 7 near 'from'");
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;

pub use ast::{Node, SqlNode, Statement};
pub use lexer::{Span, Token, TokenKind, Tokenizer};
pub use parser::{ParseContext, ParseError, Parser, ParserConfig, TokenSource};

/// Parses one statement with the default configuration.
pub fn parse(sql: &str) -> parser::Result<Statement> {
    Parser::default().parse_str(sql)
}
