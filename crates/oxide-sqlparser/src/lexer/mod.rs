//! SQL tokenizer
//!
//! Turns statement text into the token stream consumed by the parser.

mod span;
mod token;
mod tokenizer;

pub use span::Span;
pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;
