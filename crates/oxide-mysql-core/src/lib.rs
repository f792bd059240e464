//! # oxide-mysql-core
//!
//! A parser for single MySQL-dialect SQL statements.
//!
//! This crate provides:
//! - A hand-written lexer with byte-offset spans
//! - A recursive descent parser producing a typed AST
//! - `Display` rendering of every AST node back to canonical SQL
//! - A flat [`summary::StatementSummary`] view of a parsed statement
//!
//! ## Parsing
//!
//! ```rust
//! use oxide_mysql_core::{parse, Statement};
//!
//! let stmt = parse("SELECT ID, NAME FROM DB1.TB1 t1 WHERE t1.ID = 1 LIMIT 10;").unwrap();
//! let Statement::Select(select) = &stmt else { panic!("not a SELECT") };
//!
//! assert_eq!(select.from[0].schema.as_deref(), Some("DB1"));
//! assert_eq!(select.limit, Some(10));
//! assert_eq!(
//!     stmt.to_string(),
//!     "SELECT ID, NAME FROM DB1.TB1 AS t1 WHERE t1.ID = 1 LIMIT 10"
//! );
//! ```
//!
//! ## Errors
//!
//! Every failure carries the byte offset where it was detected:
//!
//! ```rust
//! use oxide_mysql_core::{parse, ErrorKind};
//!
//! let err = parse("SELECT FROM;").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Syntax);
//! assert_eq!(err.offset(), 7);
//! ```
//!
//! ## Feature flags
//!
//! - `serde`: derives `Serialize`/`Deserialize` for the AST, tokens, errors
//!   and summaries.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod summary;

pub use ast::{Expr, Literal, Statement};
pub use lexer::{Keyword, Lexer, Span, Token, TokenKind};
pub use parser::{ErrorKind, ParseError, Parser};
pub use summary::StatementSummary;

/// Parses `text` as exactly one MySQL statement, optionally terminated by `;`.
///
/// # Errors
///
/// Returns a `ParseError` describing the first lexical, syntactic or INSERT
/// arity problem found.
pub fn parse(text: &str) -> Result<Statement, ParseError> {
    Parser::new(text).parse_statement()
}
