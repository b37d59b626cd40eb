//! SQL Parser
//!
//! A table-driven LALR(1) shift-reduce parser. The [`Automaton`] walks the
//! packed tables of a [`Grammar`]; the grammar actions build the syntax tree
//! of the single statement being parsed and store it in the
//! [`ParseContext`].
//!
//! ```rust
//! use oxide_sqlparser::parser::{ParseContext, Parser};
//! use oxide_sqlparser::Tokenizer;
//!
//! let parser = Parser::default();
//! let mut ctx = ParseContext::new();
//! let mut tokens = Tokenizer::new("select a from t where a = 1");
//! let statement = parser.parse(&mut tokens, &mut ctx).unwrap();
//! assert_eq!(statement.to_string(), "select a from t where a = 1");
//! ```

mod actions;
mod automaton;
mod config;
mod context;
mod error;
mod grammar;
mod stack;
mod tables;

use tracing::debug;

pub use actions::SqlActions;
pub use automaton::{Automaton, Reduce};
pub use config::{DEFAULT_MAX_DEPTH, ParserConfig};
pub use context::{ParseContext, TokenSource};
pub use error::{Diagnostic, ParseError, Result};
pub use grammar::{Action, EOF_SYMBOL, ERROR_SYMBOL, FLAG, Grammar, PRIVATE};
pub use stack::{Frame, Rhs, SemanticValue};

use crate::ast::Statement;
use crate::lexer::Tokenizer;

/// Parses SQL statements with the built-in grammar.
///
/// A parser holds no per-parse state and may be shared between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Creates a parser with the given configuration.
    #[must_use]
    pub const fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses one statement from `source`.
    ///
    /// The context should be fresh; diagnostics from an earlier parse would
    /// make this one fail.
    pub fn parse<S>(&self, source: &mut S, ctx: &mut ParseContext) -> Result<Statement>
    where
        S: TokenSource + ?Sized,
    {
        Automaton::new(Grammar::sql())
            .with_max_depth(self.config.max_depth)
            .run(source, &mut SqlActions, ctx)?;
        let statement = ctx.take_parse_tree().ok_or(ParseError::NoStatement)?;
        debug!(kind = statement.kind(), "parsed statement");
        Ok(statement)
    }

    /// Tokenizes and parses `sql` with a fresh context.
    pub fn parse_str(&self, sql: &str) -> Result<Statement> {
        let mut ctx = ParseContext::new();
        self.parse(&mut Tokenizer::new(sql), &mut ctx)
    }
}
