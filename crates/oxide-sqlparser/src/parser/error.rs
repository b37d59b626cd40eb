//! Parser error types.

use std::fmt;

use serde::Serialize;

use crate::lexer::TokenKind;

/// One reported problem, located at the token that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// What went wrong, such as `syntax error`.
    pub message: String,
    /// Byte offset of the offending token.
    pub position: usize,
    /// Text of the offending token; empty at end of input.
    pub near: String,
    /// Code of the offending token.
    pub token: TokenKind,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        position: usize,
        near: impl Into<String>,
        token: TokenKind,
    ) -> Self {
        Self {
            message: message.into(),
            position,
            near: near.into(),
            token,
        }
    }

    /// Returns true if the diagnostic points at the end of input.
    #[must_use]
    pub const fn at_eof(&self) -> bool {
        self.token.is_eof()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at position {}", self.message, self.position)?;
        if self.at_eof() {
            f.write_str(" near end of input")
        } else {
            write!(f, " near '{}'", self.near)
        }
    }
}

/// Errors that can occur while parsing a statement.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// No legal action for the lookahead and recovery gave up.
    #[error("{0}")]
    Syntax(Diagnostic),

    /// The tokenizer could not scan the offending token.
    #[error("{0}")]
    Lexical(Diagnostic),

    /// The input was resynchronized and accepted, but errors were reported
    /// on the way; the tree is not returned.
    #[error("{} syntax error(s), first: {}", .errors.len(), FirstError(.errors))]
    Recovered {
        /// Every error reported during the parse, in order.
        errors: Vec<Diagnostic>,
    },

    /// A grammar action rejected the text of a token, such as `LOCK IN`
    /// followed by anything other than `SHARE MODE`.
    #[error("{0}")]
    Semantic(Diagnostic),

    /// The parse stack grew beyond the configured limit.
    #[error("statement nesting exceeds the limit of {limit} frames")]
    DepthExceeded {
        /// The configured maximum depth.
        limit: usize,
    },

    /// A grammar action found a stack value of the wrong type; the tables
    /// and the actions disagree.
    #[error("production {production} expected {expected} on the stack, found {found}")]
    ValueMismatch {
        /// The production being reduced.
        production: usize,
        /// The value type the action needed.
        expected: &'static str,
        /// The value type that was present.
        found: &'static str,
    },

    /// The parse finished without delivering a statement.
    #[error("parse accepted without producing a statement")]
    NoStatement,
}

impl ParseError {
    /// The located diagnostics carried by this error.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Self::Syntax(diagnostic) | Self::Lexical(diagnostic) | Self::Semantic(diagnostic) => {
                std::slice::from_ref(diagnostic)
            }
            Self::Recovered { errors } => errors,
            Self::DepthExceeded { .. } | Self::ValueMismatch { .. } | Self::NoStatement => &[],
        }
    }

    /// Byte offset of the first located problem.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        self.diagnostics().first().map(|d| d.position)
    }
}

struct FirstError<'a>(&'a [Diagnostic]);

impl fmt::Display for FirstError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.first() {
            Some(first) => first.fmt(f),
            None => f.write_str("none"),
        }
    }
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParseError>;
