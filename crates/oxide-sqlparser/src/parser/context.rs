//! State shared between the tokenizer, the automaton and the grammar actions.

use crate::ast::Statement;
use crate::lexer::{Token, TokenKind};

use super::error::Diagnostic;

/// A supplier of tokens for one parse.
///
/// The context is passed on every call so a source can honour the flags the
/// grammar actions set: comments are only significant while
/// [`ParseContext::allow_comments`] is true, and after
/// [`ParseContext::eof_forced`] every token must be end-of-input.
pub trait TokenSource {
    /// Returns the next token, or an end-of-input token when exhausted.
    fn next_token(&mut self, ctx: &ParseContext) -> Token;
}

impl<T: TokenSource + ?Sized> TokenSource for &mut T {
    fn next_token(&mut self, ctx: &ParseContext) -> Token {
        (**self).next_token(ctx)
    }
}

/// Per-parse mutable state.
///
/// A context belongs to exactly one parse at a time; call
/// [`ParseContext::reset`] before reusing it.
#[derive(Debug, Default)]
pub struct ParseContext {
    allow_comments: bool,
    force_eof: bool,
    parse_tree: Option<Statement>,
    diagnostics: Vec<Diagnostic>,
    last_token: Option<(usize, TokenKind, String)>,
}

impl ParseContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether comment tokens are currently significant.
    #[must_use]
    pub const fn allow_comments(&self) -> bool {
        self.allow_comments
    }

    /// Sets whether comment tokens are significant.
    pub fn set_allow_comments(&mut self, allow: bool) {
        self.allow_comments = allow;
    }

    /// Makes the token source report end-of-input from now on.
    pub fn force_eof(&mut self) {
        self.force_eof = true;
    }

    /// Whether end-of-input has been forced.
    #[must_use]
    pub const fn eof_forced(&self) -> bool {
        self.force_eof
    }

    /// Delivers the completed statement.
    pub fn set_parse_tree(&mut self, statement: Statement) {
        self.parse_tree = Some(statement);
    }

    /// Takes the delivered statement, leaving the slot empty.
    pub fn take_parse_tree(&mut self) -> Option<Statement> {
        self.parse_tree.take()
    }

    /// Records the most recently scanned token; diagnostics point at it.
    pub fn observe(&mut self, token: &Token) {
        self.last_token = Some((token.span.start, token.kind, token.text()));
    }

    /// Reports a problem at the most recently scanned token and returns the
    /// recorded diagnostic.
    pub fn report(&mut self, message: impl Into<String>) -> Diagnostic {
        let diagnostic = match &self.last_token {
            Some((position, kind, near)) => Diagnostic::new(message, *position, near.clone(), *kind),
            None => Diagnostic::new(message, 0, "", TokenKind::EOF),
        };
        self.diagnostics.push(diagnostic.clone());
        diagnostic
    }

    /// Reports a problem at an explicit location and returns the recorded
    /// diagnostic.
    pub fn report_at(
        &mut self,
        message: impl Into<String>,
        position: usize,
        near: impl Into<String>,
        token: TokenKind,
    ) -> Diagnostic {
        let diagnostic = Diagnostic::new(message, position, near, token);
        self.diagnostics.push(diagnostic.clone());
        diagnostic
    }

    /// Every problem reported so far.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of problems reported so far.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Clears all state so the context can serve another parse.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Span;

    #[test]
    fn test_report_uses_last_token() {
        let mut ctx = ParseContext::new();
        ctx.observe(&Token::new(TokenKind::ID, "garbage", Span::new(9, 16)));
        let diagnostic = ctx.report("syntax error");
        assert_eq!(diagnostic.position, 9);
        assert_eq!(diagnostic.near, "garbage");
        assert_eq!(ctx.error_count(), 1);
    }

    #[test]
    fn test_report_at_ignores_last_token() {
        let mut ctx = ParseContext::new();
        ctx.observe(&Token::new(TokenKind::ID, "later", Span::new(30, 35)));
        let diagnostic = ctx.report_at("expecting share", 24, "shared", TokenKind::ID);
        assert_eq!(diagnostic.position, 24);
        assert_eq!(diagnostic.near, "shared");
        assert_eq!(ctx.diagnostics(), [diagnostic]);
    }

    #[test]
    fn test_report_without_tokens() {
        let mut ctx = ParseContext::new();
        let diagnostic = ctx.report("syntax error");
        assert_eq!(diagnostic.position, 0);
        assert!(diagnostic.at_eof());
    }

    #[test]
    fn test_flags_and_reset() {
        let mut ctx = ParseContext::new();
        ctx.set_allow_comments(true);
        ctx.force_eof();
        ctx.report("oops");
        assert!(ctx.allow_comments());
        assert!(ctx.eof_forced());

        ctx.reset();
        assert!(!ctx.allow_comments());
        assert!(!ctx.eof_forced());
        assert!(ctx.diagnostics().is_empty());
        assert!(ctx.take_parse_tree().is_none());
    }
}
