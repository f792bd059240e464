//! SQL Lexer/Tokenizer
//!
//! This module provides a hand-written lexer for MySQL that produces a lazy
//! stream of tokens.

mod span;
mod token;
mod tokenizer;

pub use span::Span;
pub use token::{Keyword, Token, TokenKind};
pub use tokenizer::Lexer;
