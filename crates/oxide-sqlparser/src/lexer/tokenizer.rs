//! MySQL-flavoured SQL tokenizer.

use super::{Span, Token, TokenKind};
use crate::parser::{ParseContext, TokenSource};

/// A tokenizer over the bytes of one SQL statement.
///
/// Comments are returned as [`TokenKind::COMMENT`] tokens only while the
/// parse context allows them, and every token after the context forces
/// end-of-input is [`TokenKind::EOF`].
pub struct Tokenizer<'a> {
    /// The input source bytes.
    input: &'a [u8],
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self::from_bytes(input.as_bytes())
    }

    /// Creates a tokenizer over raw bytes.
    #[must_use]
    pub const fn from_bytes(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
        }
    }

    /// The current byte offset.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn peek_next(&self) -> Option<u8> {
        self.input.get(self.pos + 1).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    const fn make_span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    fn raw_token(&self, kind: TokenKind) -> Token {
        let span = self.make_span();
        Token::new(kind, span.slice(self.input), span)
    }

    /// Scans the next token regardless of comment or end-of-input flags.
    pub fn scan(&mut self) -> Token {
        self.skip_whitespace();
        self.start = self.pos;

        let Some(byte) = self.advance() else {
            return Token::eof(self.pos);
        };

        match byte {
            b if is_letter(b) => self.scan_identifier(),
            b if b.is_ascii_digit() => self.scan_number(),
            b'.' if self.peek().is_some_and(|b| b.is_ascii_digit()) => self.scan_number(),
            b':' => self.scan_bind_var(),
            b'\'' | b'"' => self.scan_string(byte),
            b'`' => self.scan_quoted_identifier(),
            b'/' if self.peek() == Some(b'*') => self.scan_block_comment(),
            b'/' if self.peek() == Some(b'/') => self.scan_line_comment(),
            b'-' if self.peek() == Some(b'-') => self.scan_line_comment(),
            b'<' => match (self.peek(), self.peek_next()) {
                (Some(b'>'), _) => {
                    self.pos += 1;
                    self.raw_token(TokenKind::NE)
                }
                (Some(b'='), Some(b'>')) => {
                    self.pos += 2;
                    self.raw_token(TokenKind::NULL_SAFE_EQUAL)
                }
                (Some(b'='), _) => {
                    self.pos += 1;
                    self.raw_token(TokenKind::LE)
                }
                _ => self.raw_token(TokenKind::LT),
            },
            b'>' => {
                if self.peek() == Some(b'=') {
                    self.pos += 1;
                    self.raw_token(TokenKind::GE)
                } else {
                    self.raw_token(TokenKind::GT)
                }
            }
            b'!' => {
                if self.peek() == Some(b'=') {
                    self.pos += 1;
                    self.raw_token(TokenKind::NE)
                } else {
                    self.raw_token(TokenKind::LEX_ERROR)
                }
            }
            b'=' | b',' | b';' | b'(' | b')' | b'+' | b'-' | b'*' | b'/' | b'%' | b'&'
            | b'|' | b'^' | b'~' | b'.' => self.raw_token(TokenKind::char(byte)),
            _ => {
                // Keep a whole UTF-8 sequence together in the error text.
                while self.peek().is_some_and(|b| b & 0xC0 == 0x80) {
                    self.pos += 1;
                }
                self.raw_token(TokenKind::LEX_ERROR)
            }
        }
    }

    fn scan_identifier(&mut self) -> Token {
        while self.peek().is_some_and(|b| is_letter(b) || b.is_ascii_digit()) {
            self.pos += 1;
        }
        let span = self.make_span();
        let text = span.slice(self.input);
        let kind = std::str::from_utf8(text)
            .ok()
            .and_then(TokenKind::keyword)
            .unwrap_or(TokenKind::ID);
        Token::new(kind, text, span)
    }

    fn scan_number(&mut self) -> Token {
        let first = self.input[self.start];
        if first == b'0' && matches!(self.peek(), Some(b'x' | b'X')) {
            self.pos += 1;
            if !self.peek().is_some_and(|b| b.is_ascii_hexdigit()) {
                return self.raw_token(TokenKind::LEX_ERROR);
            }
            while self.peek().is_some_and(|b| b.is_ascii_hexdigit()) {
                self.pos += 1;
            }
            return self.raw_token(TokenKind::NUMBER);
        }

        let mut seen_dot = first == b'.';
        loop {
            match self.peek() {
                Some(b) if b.is_ascii_digit() => self.pos += 1,
                Some(b'.') if !seen_dot => {
                    seen_dot = true;
                    self.pos += 1;
                }
                _ => break,
            }
        }

        if matches!(self.peek(), Some(b'e' | b'E')) {
            let sign = usize::from(matches!(self.peek_next(), Some(b'+' | b'-')));
            let digits_at = self.pos + 1 + sign;
            if self.input.get(digits_at).is_some_and(u8::is_ascii_digit) {
                self.pos = digits_at;
                while self.peek().is_some_and(|b| b.is_ascii_digit()) {
                    self.pos += 1;
                }
            }
        }

        if self.peek().is_some_and(is_letter) {
            // Digits running into letters, such as `12abc`.
            while self.peek().is_some_and(|b| is_letter(b) || b.is_ascii_digit()) {
                self.pos += 1;
            }
            return self.raw_token(TokenKind::LEX_ERROR);
        }
        self.raw_token(TokenKind::NUMBER)
    }

    fn scan_bind_var(&mut self) -> Token {
        while self
            .peek()
            .is_some_and(|b| is_letter(b) || b.is_ascii_digit() || b == b'.')
        {
            self.pos += 1;
        }
        if self.pos - self.start == 1 {
            return self.raw_token(TokenKind::LEX_ERROR);
        }
        self.raw_token(TokenKind::VALUE_ARG)
    }

    fn scan_string(&mut self, quote: u8) -> Token {
        let mut value = Vec::new();
        loop {
            match self.advance() {
                None => return self.raw_token(TokenKind::LEX_ERROR),
                Some(b) if b == quote => {
                    if self.peek() == Some(quote) {
                        self.pos += 1;
                        value.push(quote);
                    } else {
                        break;
                    }
                }
                Some(b'\\') => match self.advance() {
                    None => return self.raw_token(TokenKind::LEX_ERROR),
                    Some(escaped) => value.push(decode_escape(escaped)),
                },
                Some(b) => value.push(b),
            }
        }
        Token::new(TokenKind::STRING, value, self.make_span())
    }

    fn scan_quoted_identifier(&mut self) -> Token {
        let mut value = Vec::new();
        loop {
            match self.advance() {
                None => return self.raw_token(TokenKind::LEX_ERROR),
                Some(b'`') => {
                    if self.peek() == Some(b'`') {
                        self.pos += 1;
                        value.push(b'`');
                    } else {
                        break;
                    }
                }
                Some(b) => value.push(b),
            }
        }
        if value.is_empty() {
            return self.raw_token(TokenKind::LEX_ERROR);
        }
        Token::new(TokenKind::ID, value, self.make_span())
    }

    fn scan_block_comment(&mut self) -> Token {
        self.pos += 1; // *
        loop {
            match self.advance() {
                None => return self.raw_token(TokenKind::LEX_ERROR),
                Some(b'*') if self.peek() == Some(b'/') => {
                    self.pos += 1;
                    return self.raw_token(TokenKind::COMMENT);
                }
                Some(_) => {}
            }
        }
    }

    fn scan_line_comment(&mut self) -> Token {
        while let Some(b) = self.advance() {
            if b == b'\n' {
                break;
            }
        }
        self.raw_token(TokenKind::COMMENT)
    }
}

impl TokenSource for Tokenizer<'_> {
    fn next_token(&mut self, ctx: &ParseContext) -> Token {
        loop {
            if ctx.eof_forced() {
                return Token::eof(self.pos);
            }
            let token = self.scan();
            if token.kind == TokenKind::COMMENT && !ctx.allow_comments() {
                continue;
            }
            return token;
        }
    }
}

const fn is_letter(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'@'
}

const fn decode_escape(b: u8) -> u8 {
    match b {
        b'0' => 0,
        b'b' => 0x08,
        b'n' => b'\n',
        b'r' => b'\r',
        b't' => b'\t',
        b'Z' => 0x1A,
        other => other,
    }
}
