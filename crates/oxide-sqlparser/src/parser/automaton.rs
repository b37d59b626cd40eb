//! The shift-reduce engine.
//!
//! The automaton knows nothing about SQL: it walks a [`Grammar`], pulls
//! tokens from a [`TokenSource`] and hands every reduction to a [`Reduce`]
//! implementation that builds the semantic values.
//!
//! Error recovery follows the yacc protocol. The first error is reported and
//! the stack is unwound to the nearest state that can shift the `error`
//! symbol. From there up to three lookahead tokens are discarded while
//! looking for one the state accepts; three shifts without a new error
//! end recovery. Running out of states, discards or input aborts the parse.

use tracing::{debug, trace};

use super::context::{ParseContext, TokenSource};
use super::error::{ParseError, Result};
use super::grammar::{Action, Grammar, EOF_SYMBOL};
use super::stack::Frame;
use crate::lexer::{Span, Token, TokenKind};

/// Initial capacity of the parse stack.
const INITIAL_STACK: usize = 200;

/// Consecutive discarded tokens after which recovery gives up.
const MAX_DISCARDS: usize = 3;

/// Builds semantic values for the automaton.
pub trait Reduce {
    /// The value type kept on the stack.
    type Value;

    /// The value of the initial frame and of the synthetic `error` symbol.
    fn empty(&mut self) -> Self::Value;

    /// The value of a shifted token.
    fn shift(&mut self, token: Token) -> Self::Value;

    /// Runs the action of `production` over its right-hand-side values, in
    /// left-to-right order. `spans[i]` is the input covered by `rhs[i]`. An
    /// error aborts the parse.
    fn reduce(
        &mut self,
        production: usize,
        rhs: Vec<Self::Value>,
        spans: &[Span],
        ctx: &mut ParseContext,
    ) -> Result<Self::Value>;
}

/// A buffered lookahead token and its table symbol.
struct Lookahead {
    token: Token,
    symbol: i32,
}

/// Error-recovery bookkeeping.
#[derive(Debug, Default)]
struct Recovery {
    /// Shifts left before recovery is over; `0` when not recovering.
    countdown: u8,
    /// Tokens discarded since the last shift.
    discards: usize,
}

/// Runs a grammar over a token source.
#[derive(Debug, Clone, Copy)]
pub struct Automaton<'g> {
    grammar: &'g Grammar,
    max_depth: Option<usize>,
}

impl<'g> Automaton<'g> {
    /// Creates an automaton with no depth bound.
    #[must_use]
    pub const fn new(grammar: &'g Grammar) -> Self {
        Self {
            grammar,
            max_depth: None,
        }
    }

    /// Bounds the number of stack frames.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parses one input.
    ///
    /// Returns `Ok(())` when the input was accepted without any reported
    /// error. Errors reported during a successful resynchronization still
    /// fail the parse with [`ParseError::Recovered`].
    pub fn run<S, R>(&self, source: &mut S, reducer: &mut R, ctx: &mut ParseContext) -> Result<()>
    where
        S: TokenSource + ?Sized,
        R: Reduce,
    {
        let grammar = self.grammar;
        let mut stack: Vec<Frame<R::Value>> = Vec::with_capacity(INITIAL_STACK);
        stack.push(Frame {
            state: 0,
            span: Span::point(0),
            value: reducer.empty(),
        });
        let mut state = 0;
        let mut lookahead: Option<Lookahead> = None;
        let mut recovery = Recovery::default();

        loop {
            if grammar.reads_lookahead(state) && lookahead.is_none() {
                lookahead = Some(self.fetch(source, ctx));
            }
            let symbol = lookahead.as_ref().map(|la| la.symbol);

            if let Some(next) = symbol.and_then(|symbol| grammar.shift(state, symbol)) {
                if let Some(Lookahead { token, symbol }) = lookahead.take() {
                    trace!(state, next, symbol, "shift");
                    let span = token.span;
                    self.push(&mut stack, next, span, reducer.shift(token))?;
                    state = next;
                    recovery.discards = 0;
                    recovery.countdown = recovery.countdown.saturating_sub(1);
                    continue;
                }
            }

            match grammar.default_action(state, symbol) {
                Action::Accept => {
                    return if ctx.error_count() == 0 {
                        debug!("statement accepted");
                        Ok(())
                    } else {
                        debug!(errors = ctx.error_count(), "accepted after recovery");
                        Err(ParseError::Recovered {
                            errors: ctx.diagnostics().to_vec(),
                        })
                    };
                }
                Action::Reduce(production) => {
                    let arity = grammar.arity(production);
                    let split = stack.len().checked_sub(arity).filter(|&at| at > 0);
                    let Some(split) = split else {
                        return Err(abort(ctx));
                    };
                    let (rhs, spans): (Vec<R::Value>, Vec<Span>) = stack
                        .drain(split..)
                        .map(|frame| (frame.value, frame.span))
                        .unzip();
                    let (top, end) = stack
                        .last()
                        .map_or((0, 0), |frame| (frame.state, frame.span.end));
                    let Some(next) = grammar.goto(top, production) else {
                        return Err(abort(ctx));
                    };
                    let span = match (spans.first(), spans.last()) {
                        (Some(first), Some(last)) => Span::new(first.start, last.end),
                        _ => Span::point(end),
                    };
                    trace!(state, production, arity, next, "reduce");
                    let value = reducer.reduce(production, rhs, &spans, ctx)?;
                    self.push(&mut stack, next, span, value)?;
                    state = next;
                }
                Action::Error => {
                    if recovery.countdown == 0 {
                        let lexical = lookahead
                            .as_ref()
                            .is_some_and(|la| la.token.kind == TokenKind::LEX_ERROR);
                        let diagnostic = ctx.report(if lexical {
                            "unrecognized token"
                        } else {
                            "syntax error"
                        });
                        debug!(%diagnostic, "syntax error");
                    }
                    if recovery.countdown < 3 {
                        recovery.countdown = 3;
                        let recovered = loop {
                            let Some(frame) = stack.last() else {
                                break None;
                            };
                            if let Some(next) = grammar.error_shift(frame.state) {
                                break Some(next);
                            }
                            trace!(state = frame.state, "pop during recovery");
                            stack.pop();
                        };
                        let Some(next) = recovered else {
                            return Err(abort(ctx));
                        };
                        trace!(next, "shift error");
                        let at = lookahead.as_ref().map_or_else(
                            || stack.last().map_or(0, |frame| frame.span.end),
                            |la| la.token.span.start,
                        );
                        let value = reducer.empty();
                        self.push(&mut stack, next, Span::point(at), value)?;
                        state = next;
                        continue;
                    }

                    if matches!(symbol, None | Some(EOF_SYMBOL)) {
                        trace!("end of input during recovery");
                        return Err(abort(ctx));
                    }
                    recovery.discards += 1;
                    if recovery.discards >= MAX_DISCARDS {
                        trace!(discards = recovery.discards, "discard limit reached");
                        return Err(abort(ctx));
                    }
                    trace!(?symbol, "discard");
                    lookahead = None;
                }
            }
        }
    }

    fn fetch<S: TokenSource + ?Sized>(&self, source: &mut S, ctx: &mut ParseContext) -> Lookahead {
        let token = source.next_token(ctx);
        ctx.observe(&token);
        let symbol = self.grammar.translate(token.kind);
        trace!(kind = %token.kind, symbol, "lookahead");
        Lookahead { token, symbol }
    }

    fn push<V>(
        &self,
        stack: &mut Vec<Frame<V>>,
        state: usize,
        span: Span,
        value: V,
    ) -> Result<()> {
        if let Some(limit) = self.max_depth {
            if stack.len() >= limit {
                return Err(ParseError::DepthExceeded { limit });
            }
        }
        if stack.len() == stack.capacity() {
            stack.reserve(stack.len());
        }
        stack.push(Frame { state, span, value });
        Ok(())
    }
}

/// The error returned when recovery gives up: the first reported diagnostic,
/// or a fresh one at the current token.
fn abort(ctx: &mut ParseContext) -> ParseError {
    let diagnostic = match ctx.diagnostics().first() {
        Some(first) => first.clone(),
        None => ctx.report("syntax error"),
    };
    debug!(%diagnostic, "parse aborted");
    if diagnostic.token == TokenKind::LEX_ERROR {
        ParseError::Lexical(diagnostic)
    } else {
        ParseError::Syntax(diagnostic)
    }
}
