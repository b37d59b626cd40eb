//! Packed LALR(1) parse tables.
//!
//! The tables use the yacc layout. Terminals are first translated from token
//! codes to compact symbol numbers through `tok1`/`tok2`/`tok3`. For a state
//! `s` and symbol `t`, `act[pact[s] + t]` is a shift target when `chk` of that
//! target equals `t`; otherwise `def[s]` applies: a positive production
//! number to reduce, `0` for an error, or `-2` to consult the exception list
//! `exca`, where `-1` means accept. Gotos for nonterminal `n` come from
//! `act[pgo[n] + s + 1]` when `chk` of the result is `-n`, else `act[pgo[n]]`.

use super::tables;
use crate::lexer::TokenKind;

/// `pact` entry of a state that only has a default action.
pub const FLAG: i32 = -1000;

/// Start of the private token range indexed by `tok2`.
pub const PRIVATE: i32 = 57344;

/// Symbol number of end-of-input.
pub const EOF_SYMBOL: i32 = 1;

/// Symbol number of the synthetic error token.
pub const ERROR_SYMBOL: i32 = 2;

/// A set of parse tables.
///
/// Tables are read-only and may be shared by any number of concurrent parses.
#[derive(Debug, Clone, Copy)]
pub struct Grammar {
    pub exca: &'static [i32],
    pub act: &'static [i32],
    pub pact: &'static [i32],
    pub pgo: &'static [i32],
    pub r1: &'static [i32],
    pub r2: &'static [i32],
    pub chk: &'static [i32],
    pub def: &'static [i32],
    pub tok1: &'static [i32],
    pub tok2: &'static [i32],
    pub tok3: &'static [i32],
}

/// What to do when no shift applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Reduce by the production.
    Reduce(usize),
    /// The input is complete.
    Accept,
    /// No legal action.
    Error,
}

static SQL: Grammar = Grammar {
    exca: &tables::EXCA,
    act: &tables::ACT,
    pact: &tables::PACT,
    pgo: &tables::PGO,
    r1: &tables::R1,
    r2: &tables::R2,
    chk: &tables::CHK,
    def: &tables::DEF,
    tok1: &tables::TOK1,
    tok2: &tables::TOK2,
    tok3: &tables::TOK3,
};

impl Grammar {
    /// The tables of the SQL grammar.
    #[must_use]
    pub fn sql() -> &'static Self {
        &SQL
    }

    /// Translates a token code into a table symbol.
    ///
    /// Codes that the tables do not know become the "unknown" symbol, so they
    /// always lead to a syntax error rather than a lookup failure.
    #[must_use]
    pub fn translate(&self, kind: TokenKind) -> i32 {
        let code = kind.0;
        if code <= 0 {
            return self.tok1.first().copied().unwrap_or(EOF_SYMBOL);
        }
        let mapped = if let Some(&symbol) = usize::try_from(code)
            .ok()
            .and_then(|i| self.tok1.get(i))
        {
            symbol
        } else if let Some(&symbol) = usize::try_from(code - PRIVATE)
            .ok()
            .and_then(|i| self.tok2.get(i))
        {
            symbol
        } else {
            self.tok3
                .chunks_exact(2)
                .find(|pair| pair[0] == code)
                .map_or(0, |pair| pair[1])
        };
        if mapped == 0 {
            self.unknown_symbol()
        } else {
            mapped
        }
    }

    fn unknown_symbol(&self) -> i32 {
        self.tok2.get(1).copied().unwrap_or(ERROR_SYMBOL + 1)
    }

    fn entry(table: &[i32], index: usize) -> i32 {
        table.get(index).copied().unwrap_or(0)
    }

    fn packed(&self, index: i32) -> Option<usize> {
        let index = usize::try_from(index).ok()?;
        self.act.get(index).and_then(|&target| usize::try_from(target).ok())
    }

    /// Whether the state's action depends on the lookahead.
    #[must_use]
    pub fn reads_lookahead(&self, state: usize) -> bool {
        Self::entry(self.pact, state) > FLAG || Self::entry(self.def, state) == -2
    }

    /// The state reached by shifting `symbol`, if that is legal.
    #[must_use]
    pub fn shift(&self, state: usize, symbol: i32) -> Option<usize> {
        let base = Self::entry(self.pact, state);
        if base <= FLAG {
            return None;
        }
        let target = self.packed(base + symbol)?;
        (Self::entry(self.chk, target) == symbol).then_some(target)
    }

    /// The state reached by shifting the error symbol, if that is legal.
    #[must_use]
    pub fn error_shift(&self, state: usize) -> Option<usize> {
        self.shift(state, ERROR_SYMBOL)
    }

    /// The action taken when `symbol` cannot be shifted. `symbol` is `None`
    /// when no lookahead was read, which is only valid if
    /// [`reads_lookahead`](Self::reads_lookahead) is false.
    #[must_use]
    pub fn default_action(&self, state: usize, symbol: Option<i32>) -> Action {
        let mut action = Self::entry(self.def, state);
        if action == -2 {
            action = self.exception(state, symbol.unwrap_or(EOF_SYMBOL));
            if action < 0 {
                return Action::Accept;
            }
        }
        match usize::try_from(action) {
            Ok(0) | Err(_) => Action::Error,
            Ok(production) => Action::Reduce(production),
        }
    }

    fn exception(&self, state: usize, symbol: i32) -> i32 {
        let mut pairs = self.exca.chunks_exact(2);
        let header = i32::try_from(state).ok();
        if !pairs
            .by_ref()
            .any(|pair| pair[0] == -1 && Some(pair[1]) == header)
        {
            return 0;
        }
        for pair in pairs {
            if pair[0] < 0 || pair[0] == symbol {
                return pair[1];
            }
        }
        0
    }

    /// Number of right-hand-side symbols of a production.
    #[must_use]
    pub fn arity(&self, production: usize) -> usize {
        usize::try_from(Self::entry(self.r2, production)).unwrap_or(0)
    }

    /// The state reached after reducing `production` on top of `state`.
    #[must_use]
    pub fn goto(&self, state: usize, production: usize) -> Option<usize> {
        let nonterminal = Self::entry(self.r1, production);
        let base = Self::entry(self.pgo, usize::try_from(nonterminal).ok()?);
        let offset = i32::try_from(state).ok()?;
        if let Some(target) = self.packed(base + offset + 1) {
            if Self::entry(self.chk, target) == -nonterminal {
                return Some(target);
            }
        }
        self.packed(base)
    }

    /// Number of productions, including the augmented start production.
    #[must_use]
    pub fn production_count(&self) -> usize {
        self.r1.len()
    }
}
